//! The endpoint for creating questions.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    app_state::lock_connection,
    extract::JsonBody,
    question::{NewQuestion, NewQuestionData, QuestionId, create_question},
};

/// The state needed for creating a question.
#[derive(Debug, Clone)]
pub struct CreateQuestionState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateQuestionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The response body for a created question.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

/// Handle a request to create a question.
///
/// Responds with [Error::InvalidRequest] if a field is missing and with
/// [Error::Unprocessable] if the question could not be saved.
pub async fn create_question_endpoint(
    State(state): State<CreateQuestionState>,
    JsonBody(data): JsonBody<NewQuestionData>,
) -> Result<(StatusCode, Json<CreatedResponse>), Error> {
    let new_question = NewQuestion::try_from(data)?;

    let connection = lock_connection(&state.db_connection)?;

    let question = create_question(new_question, &connection).map_err(|error| {
        tracing::error!("An unexpected error occurred while creating a question: {error}");
        Error::Unprocessable
    })?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            created: question.id,
        }),
    ))
}

#[cfg(test)]
mod create_question_endpoint_tests {
    use axum::{
        extract::{FromRef, State},
        http::StatusCode,
    };

    use crate::{
        Error,
        extract::JsonBody,
        question::{
            NewQuestionData, Question, create::CreateQuestionState, create_question_endpoint,
            get_question,
        },
        test_utils::get_test_app_state,
    };

    fn get_create_state() -> CreateQuestionState {
        CreateQuestionState::from_ref(&get_test_app_state())
    }

    fn question_data() -> NewQuestionData {
        NewQuestionData {
            question: Some("Q".to_owned()),
            answer: Some("A".to_owned()),
            category: Some(1),
            difficulty: Some(2),
        }
    }

    #[tokio::test]
    async fn can_create_question() {
        let state = get_create_state();

        let (status, response) =
            create_question_endpoint(State(state.clone()), JsonBody(question_data()))
                .await
                .expect("Could not create question");

        assert_eq!(status, StatusCode::CREATED);
        assert!(response.success);
        let want = Question {
            id: response.created,
            question: "Q".to_owned(),
            answer: "A".to_owned(),
            category: 1,
            difficulty: 2,
        };
        assert_eq!(
            Ok(want),
            get_question(response.created, &state.db_connection.lock().unwrap())
        );
    }

    #[tokio::test]
    async fn missing_field_is_invalid_request() {
        let state = get_create_state();
        let data = NewQuestionData {
            category: None,
            ..question_data()
        };

        let response = create_question_endpoint(State(state), JsonBody(data)).await;

        assert!(matches!(response, Err(Error::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn empty_text_is_unprocessable() {
        let state = get_create_state();
        let data = NewQuestionData {
            question: Some("".to_owned()),
            answer: Some("".to_owned()),
            category: Some(0),
            difficulty: Some(0),
        };

        let response = create_question_endpoint(State(state), JsonBody(data)).await;

        assert!(matches!(response, Err(Error::Unprocessable)));
    }

    #[tokio::test]
    async fn zero_category_and_difficulty_are_accepted() {
        let state = get_create_state();
        let data = NewQuestionData {
            category: Some(0),
            difficulty: Some(0),
            ..question_data()
        };

        let response = create_question_endpoint(State(state), JsonBody(data)).await;

        assert!(response.is_ok());
    }
}
