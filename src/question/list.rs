//! The endpoint for listing questions one page at a time.

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
    category::{CategoryId, CategoryMap, get_all_categories, map_categories_by_id},
    extract::QueryParams,
    pagination::{PageWindow, PaginationConfig},
    question::{Question, count_questions, get_question_page},
};

/// The state needed for listing questions.
#[derive(Debug, Clone)]
pub struct QuestionsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for QuestionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// The query parameters for the questions endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

/// A page of questions along with every category.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// The number of questions across all pages.
    pub total_questions: u64,
    pub categories: CategoryMap,
    pub current_category: Option<CategoryId>,
}

/// Get one page of questions.
///
/// Responds with [Error::NotFound] if the page has no questions, which
/// includes page zero, pages past the last page and an empty database.
///
/// A `page` that is not a non-negative integer (e.g. `?page=abc`) is rejected
/// with [Error::InvalidRequest] instead of falling back to the first page.
pub async fn get_questions_endpoint(
    State(state): State<QuestionsPageState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<Json<QuestionsPageResponse>, Error> {
    let page = query.page.unwrap_or(state.pagination_config.default_page);
    let window =
        PageWindow::new(page, state.pagination_config.page_size).ok_or(Error::NotFound)?;

    let connection = lock_connection(&state.db_connection)?;

    let questions = get_question_page(window, &connection)?;
    if questions.is_empty() {
        return Err(Error::NotFound);
    }

    let total_questions = count_questions(&connection)?;
    let categories = map_categories_by_id(get_all_categories(&connection)?);

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions,
        total_questions,
        categories,
        current_category: None,
    }))
}
