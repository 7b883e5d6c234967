//! Trivia API is a JSON backend for a trivia quiz game.
//!
//! This library provides a REST API for listing, searching, creating and
//! deleting trivia questions, browsing them by category, and drawing quiz
//! questions that the player has not seen yet.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod app_state;
mod category;
mod db;
mod deserializers;
mod endpoints;
mod extract;
mod logging;
mod pagination;
mod question;
mod quiz;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, CategoryId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware};
pub use pagination::PaginationConfig;
pub use question::{NewQuestion, Question, QuestionId, create_question};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// Every variant is rendered to the client as the JSON error envelope
/// `{"success": false, "error": <status>, "message": <message>}`. Any detail
/// carried by a variant is only logged on the server.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was missing or null, or the request body or query
    /// string could not be parsed into the expected shape.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The requested resource was not found.
    ///
    /// This also covers queries that must return at least one row, e.g. a
    /// page of questions past the last page.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The HTTP method is not defined for the requested route.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// The request body is larger than [REQUEST_BODY_LIMIT] bytes.
    #[error("the request body is too large")]
    PayloadTooLarge,

    /// Inserting or deleting a row failed.
    ///
    /// The underlying cause is logged and not passed on to the client.
    #[error("the request could not be processed")]
    Unprocessable,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl Error {
    /// The HTTP status code sent to the client for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client for this error.
    pub fn client_message(&self) -> &'static str {
        match self {
            Error::InvalidRequest(_) => "Requête invalide",
            Error::NotFound => "Ressource non trouvée",
            Error::MethodNotAllowed => "Methode non autorisée",
            Error::PayloadTooLarge => "Requête trop volumineuse",
            Error::Unprocessable => "La requête ne peut pas être traitée",
            Error::SqlError(_) | Error::DatabaseLockError => "Erreur interne du serveur",
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

// A path segment that does not parse is treated like a route that does not exist.
impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejected path parameters: {}", rejection.body_text());
        Error::NotFound
    }
}

/// The body of every error response.
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: u16,
    message: &'static str,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::InvalidRequest(reason) => tracing::debug!("rejected request: {reason}"),
            Error::NotFound
            | Error::MethodNotAllowed
            | Error::PayloadTooLarge
            | Error::Unprocessable => {}
            // Any errors that are not handled above are not intended to be shown to the client.
            error => tracing::error!("An unexpected error occurred: {}", error),
        }

        let status = self.status_code();
        let envelope = ErrorEnvelope {
            success: false,
            error: status.as_u16(),
            message: self.client_message(),
        };

        (status, Json(envelope)).into_response()
    }
}
