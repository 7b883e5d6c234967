//! Drawing quiz questions the player has not been asked yet.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rand::{Rng, seq::SliceRandom};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    app_state::lock_connection,
    category::CategoryId,
    deserializers::deserialize_integer,
    extract::JsonBody,
    question::{Question, QuestionId, get_questions_by_category, map_question_row},
};

/// The category ID that selects questions from every category.
pub const ALL_CATEGORIES: CategoryId = 0;

/// The state needed for drawing quiz questions.
#[derive(Debug, Clone)]
pub struct QuizState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for QuizState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The category chosen for a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    /// The category ID, or [ALL_CATEGORIES].
    #[serde(deserialize_with = "deserialize_integer")]
    pub id: CategoryId,
    /// The category label shown to the player. Not used for filtering.
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
}

/// The JSON body for drawing a quiz question.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuizData {
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The next quiz question, or `None` once every eligible question has been asked.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Draw a random question from the quiz category that is not one of the previous questions.
///
/// Responds with `question: null` when there are no questions left to ask.
pub async fn get_quiz_question_endpoint(
    State(state): State<QuizState>,
    JsonBody(data): JsonBody<QuizData>,
) -> Result<Json<QuizResponse>, Error> {
    let previous_questions = data
        .previous_questions
        .ok_or_else(|| Error::InvalidRequest("missing field `previous_questions`".to_owned()))?;
    let quiz_category = data
        .quiz_category
        .ok_or_else(|| Error::InvalidRequest("missing field `quiz_category`".to_owned()))?;

    let connection = lock_connection(&state.db_connection)?;
    let eligible = get_eligible_questions(quiz_category.id, &previous_questions, &connection)?;
    let question = choose_question(eligible, &mut rand::thread_rng());

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Retrieve the questions in `category` that are not in `previous_questions`, ordered by ID.
///
/// [ALL_CATEGORIES] selects questions from every category. Previous questions
/// are filtered out after the query, so `previous_questions` may be any length.
pub fn get_eligible_questions(
    category: CategoryId,
    previous_questions: &[QuestionId],
    connection: &Connection,
) -> Result<Vec<Question>, Error> {
    let previous_questions: HashSet<QuestionId> = previous_questions.iter().copied().collect();

    let questions = if category == ALL_CATEGORIES {
        connection
            .prepare("SELECT id, question, answer, category, difficulty FROM question ORDER BY id ASC;")?
            .query_map([], map_question_row)?
            .collect::<Result<Vec<_>, _>>()?
    } else {
        get_questions_by_category(category, connection)?
    };

    Ok(questions
        .into_iter()
        .filter(|question| !previous_questions.contains(&question.id))
        .collect())
}

/// Pick one of the `eligible` questions uniformly at random.
pub fn choose_question<R: Rng + ?Sized>(eligible: Vec<Question>, rng: &mut R) -> Option<Question> {
    eligible.choose(rng).cloned()
}


#[cfg(test)]
mod get_quiz_question_endpoint_tests {
    use std::collections::HashSet;

    use axum::extract::{FromRef, State};
    use serde_json::json;

    use crate::{
        Error,
        extract::JsonBody,
        quiz::{QuizCategory, QuizData, QuizState, get_quiz_question_endpoint},
        test_utils::{get_test_app_state, insert_test_questions},
    };

    fn quiz_data(previous_questions: Vec<i64>, category: i64) -> QuizData {
        QuizData {
            previous_questions: Some(previous_questions),
            quiz_category: Some(QuizCategory {
                id: category,
                type_: None,
            }),
        }
    }

    #[tokio::test]
    async fn never_returns_previous_question() {
        let app_state = get_test_app_state();
        let science = insert_test_questions(&app_state, 2, 1);
        let art = insert_test_questions(&app_state, 2, 2);
        let excluded = science[0].id;
        let state = QuizState::from_ref(&app_state);

        let mut seen_categories = HashSet::new();
        for _ in 0..100 {
            let response =
                get_quiz_question_endpoint(State(state.clone()), JsonBody(quiz_data(vec![excluded], 0)))
                    .await
                    .expect("Could not get quiz question");

            assert!(response.success);
            let question = response.question.clone().expect("Want a question");
            assert_ne!(question.id, excluded);
            seen_categories.insert(question.category);
        }

        assert_eq!(
            seen_categories,
            HashSet::from([science[1].category, art[0].category])
        );
    }

    #[tokio::test]
    async fn honours_category() {
        let app_state = get_test_app_state();
        insert_test_questions(&app_state, 3, 1);
        let art = insert_test_questions(&app_state, 1, 2);
        let state = QuizState::from_ref(&app_state);

        let response = get_quiz_question_endpoint(State(state), JsonBody(quiz_data(vec![], 2)))
            .await
            .expect("Could not get quiz question");

        assert_eq!(response.question, Some(art[0].clone()));
    }

    #[tokio::test]
    async fn exhausted_category_returns_null_question() {
        let app_state = get_test_app_state();
        let science = insert_test_questions(&app_state, 2, 1);
        insert_test_questions(&app_state, 2, 2);
        let state = QuizState::from_ref(&app_state);
        let previous = science.iter().map(|question| question.id).collect();

        let response = get_quiz_question_endpoint(State(state), JsonBody(quiz_data(previous, 1)))
            .await
            .expect("Could not get quiz question");

        assert!(response.success);
        assert_eq!(response.question, None);
        assert_eq!(
            serde_json::to_value(&response.0).unwrap(),
            json!({"success": true, "question": null})
        );
    }

    #[tokio::test]
    async fn missing_previous_questions_is_invalid_request() {
        let state = QuizState::from_ref(&get_test_app_state());
        let data = QuizData {
            previous_questions: None,
            ..quiz_data(vec![], 0)
        };

        let response = get_quiz_question_endpoint(State(state), JsonBody(data)).await;

        assert!(matches!(response, Err(Error::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn missing_quiz_category_is_invalid_request() {
        let state = QuizState::from_ref(&get_test_app_state());
        let data = QuizData {
            quiz_category: None,
            ..quiz_data(vec![], 0)
        };

        let response = get_quiz_question_endpoint(State(state), JsonBody(data)).await;

        assert!(matches!(response, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn quiz_category_accepts_string_id() {
        let data: QuizData = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": {"type": "Science", "id": "1"}
        }))
        .unwrap();

        assert_eq!(data.quiz_category.map(|category| category.id), Some(1));
    }
}

#[cfg(test)]
mod choose_question_tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::{question::Question, quiz::choose_question};

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("Question {id}?"),
            answer: "answer".to_owned(),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn empty_set_gives_none() {
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(choose_question(vec![], &mut rng), None);
    }

    #[test]
    fn chooses_member_of_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let eligible = vec![question(1), question(2), question(3)];

        for _ in 0..20 {
            let chosen = choose_question(eligible.clone(), &mut rng).expect("Want a question");
            assert!(eligible.contains(&chosen));
        }
    }

    #[test]
    fn eventually_chooses_every_member() {
        let mut rng = StdRng::seed_from_u64(7);
        let eligible = vec![question(1), question(2), question(3)];

        let mut chosen_ids: Vec<i64> = (0..200)
            .filter_map(|_| choose_question(eligible.clone(), &mut rng))
            .map(|question| question.id)
            .collect();
        chosen_ids.sort();
        chosen_ids.dedup();

        assert_eq!(chosen_ids, [1, 2, 3]);
    }
}
