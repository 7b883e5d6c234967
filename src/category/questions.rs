//! The endpoint for listing the questions in a category.

use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::lock_connection,
    category::{CategoryId, list::CategoryState},
    extract::PathParam,
    question::{QuestionListResponse, get_questions_by_category},
};

/// Get every question in a category.
///
/// Responds with [Error::NotFound] if the category has no questions, whether
/// or not the category itself exists.
pub async fn get_category_questions_endpoint(
    PathParam(category_id): PathParam<CategoryId>,
    State(state): State<CategoryState>,
) -> Result<Json<QuestionListResponse>, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let questions = get_questions_by_category(category_id, &connection)?;

    if questions.is_empty() {
        return Err(Error::NotFound);
    }

    Ok(Json(QuestionListResponse::new(questions, Some(category_id))))
}
