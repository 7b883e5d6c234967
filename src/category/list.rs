//! The endpoint for listing categories.

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
    category::{CategoryMap, get_all_categories, map_categories_by_id},
};

/// The state needed for the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoryState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Every category keyed by ID.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

/// Get all categories as an object mapping category ID to label.
pub async fn get_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<CategoriesResponse>, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let categories = map_categories_by_id(get_all_categories(&connection)?);

    Ok(Json(CategoriesResponse { categories }))
}
