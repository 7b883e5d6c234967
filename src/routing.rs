//! Application router configuration.

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{
    AppState, Error,
    category::{get_categories_endpoint, get_category_questions_endpoint},
    endpoints,
    question::{
        create_question_endpoint, delete_question_endpoint, get_questions_endpoint,
        search_questions_endpoint,
    },
    quiz::get_quiz_question_endpoint,
};

const ALLOWED_HEADERS: &str = "Content-Type, Authorization, true";
const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

/// Return a router with all the app's routes.
///
/// Requests from any origin are allowed and every response advertises the
/// allowed request headers and methods.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route(endpoints::CATEGORIES, get(get_categories_endpoint))
        .route(
            endpoints::CATEGORY_QUESTIONS,
            get(get_category_questions_endpoint),
        )
        .route(
            endpoints::QUESTIONS,
            get(get_questions_endpoint).post(create_question_endpoint),
        )
        .route(endpoints::QUESTION, delete(delete_question_endpoint))
        .route(endpoints::SEARCH_QUESTIONS, post(search_questions_endpoint))
        .route(endpoints::QUIZZES, post(get_quiz_question_endpoint))
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .fallback(get_404_not_found)
        .with_state(state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}

async fn get_405_method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
