// API routes and handlers

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub mod auth;
pub mod health;
pub mod routes;
pub mod routines;
pub mod workouts;

/// Error body returned by the JSON API
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error_code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error_code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// Map an unexpected service failure to a 500; the underlying error is
/// logged, never surfaced to the client.
pub(crate) fn internal_error(err: anyhow::Error) -> (StatusCode, Json<ApiError>) {
    tracing::error!("request failed: {err:#}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new("INTERNAL_ERROR", "Internal server error")),
    )
}
