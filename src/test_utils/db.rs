use rusqlite::Connection;

use crate::{
    AppState,
    category::CategoryId,
    pagination::PaginationConfig,
    question::{NewQuestion, Question, create_question},
};

/// An [AppState] backed by an initialized in-memory database with the default categories.
pub(crate) fn get_test_app_state() -> AppState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");

    AppState::new(connection, PaginationConfig::default()).expect("Could not create app state")
}

/// Insert `count` questions into `category`, numbered from zero.
#[track_caller]
pub(crate) fn insert_test_questions(
    state: &AppState,
    count: usize,
    category: CategoryId,
) -> Vec<Question> {
    let connection = state.db_connection.lock().unwrap();

    (0..count)
        .map(|i| {
            create_question(
                NewQuestion {
                    question: format!("Test question {i} in category {category}?"),
                    answer: format!("Answer {i}"),
                    category,
                    difficulty: (i % 5) as i64 + 1,
                },
                &connection,
            )
            .expect("Could not create test question")
        })
        .collect()
}
