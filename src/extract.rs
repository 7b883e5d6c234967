//! Request extractors that reject with [Error] instead of axum's plain text rejections.
//!
//! Using these in handlers keeps every failed request inside the JSON error
//! envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::Error;

/// A JSON request body.
///
/// Malformed JSON, a missing `Content-Type: application/json` header, or a body
/// that does not match `T` is rejected with [Error::InvalidRequest].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// Parameters parsed from the URL path.
///
/// A parameter that fails to parse is rejected with [Error::NotFound], the same
/// as a path that does not match any route.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParam<T>(pub T);

/// Parameters parsed from the URL query string.
///
/// A query string that does not match `T` is rejected with [Error::InvalidRequest].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct QueryParams<T>(pub T);
