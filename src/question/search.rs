//! The endpoint for searching question text.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    app_state::lock_connection,
    extract::JsonBody,
    question::{QuestionListResponse, search_questions},
};

/// The state needed for searching questions.
#[derive(Debug, Clone)]
pub struct SearchQuestionsState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SearchQuestionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body for a question search.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Get every question whose text contains the search term, ignoring case.
///
/// No matches is not an error, the response simply has no questions.
pub async fn search_questions_endpoint(
    State(state): State<SearchQuestionsState>,
    JsonBody(data): JsonBody<SearchData>,
) -> Result<Json<QuestionListResponse>, Error> {
    let search_term = data
        .search_term
        .ok_or_else(|| Error::InvalidRequest("missing field `searchTerm`".to_owned()))?;

    let connection = lock_connection(&state.db_connection)?;
    let questions = search_questions(&search_term, &connection)?;

    Ok(Json(QuestionListResponse::new(questions, None)))
}

#[cfg(test)]
mod search_questions_endpoint_tests {
    use axum::extract::{FromRef, State};

    use crate::{
        Error,
        extract::JsonBody,
        question::{
            NewQuestion, create_question,
            search::{SearchData, SearchQuestionsState},
            search_questions_endpoint,
        },
        test_utils::get_test_app_state,
    };

    fn get_search_state() -> SearchQuestionsState {
        let state = SearchQuestionsState::from_ref(&get_test_app_state());

        {
            let connection = state.db_connection.lock().unwrap();
            for (question, category) in [
                ("What is the title of Tom Hanks' 1994 film?", 5),
                ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4),
                ("What is the largest lake in Africa?", 3),
            ] {
                create_question(
                    NewQuestion {
                        question: question.to_owned(),
                        answer: "answer".to_owned(),
                        category,
                        difficulty: 2,
                    },
                    &connection,
                )
                .expect("Could not create test question");
            }
        }

        state
    }

    #[tokio::test]
    async fn finds_case_insensitive_matches() {
        let state = get_search_state();
        let data = SearchData {
            search_term: Some("TiTlE".to_owned()),
        };

        let response = search_questions_endpoint(State(state), JsonBody(data))
            .await
            .expect("Could not search questions");

        assert!(response.success);
        assert_eq!(response.total_questions, 2);
        assert_eq!(response.questions.len(), 2);
        assert_eq!(response.current_category, None);
    }

    #[tokio::test]
    async fn no_matches_is_empty_success() {
        let state = get_search_state();
        let data = SearchData {
            search_term: Some("xyzzy".to_owned()),
        };

        let response = search_questions_endpoint(State(state), JsonBody(data))
            .await
            .expect("Could not search questions");

        assert!(response.success);
        assert!(response.questions.is_empty());
        assert_eq!(response.total_questions, 0);
    }

    #[tokio::test]
    async fn missing_search_term_is_invalid_request() {
        let state = get_search_state();

        let response =
            search_questions_endpoint(State(state), JsonBody(SearchData::default())).await;

        assert!(matches!(response, Err(Error::InvalidRequest(_))));
    }
}
