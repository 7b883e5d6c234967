//! The endpoint for deleting questions.

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
    extract::PathParam,
    question::{QuestionId, delete_question, get_question},
};

/// The state needed for deleting a question.
#[derive(Debug, Clone)]
pub struct DeleteQuestionState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteQuestionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The response body for a deleted question.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

/// Handle question deletion.
///
/// Responds with [Error::NotFound] if the question does not exist and with
/// [Error::Unprocessable] if it exists but could not be deleted.
pub async fn delete_question_endpoint(
    PathParam(question_id): PathParam<QuestionId>,
    State(state): State<DeleteQuestionState>,
) -> Result<Json<DeletedResponse>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_question(question_id, &connection)?;

    delete_question(question_id, &connection).map_err(|error| {
        tracing::error!("An unexpected error occurred while deleting question {question_id}: {error}");
        Error::Unprocessable
    })?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}
