//! Request error taxonomy and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use llm::Exhausted;
use thiserror::Error;
use tracing::error;

use crate::routes::ApiResponse;

/// Exact body sent when the message payload is missing or blank.
pub const VALIDATION_MESSAGE: &str =
    "Validation Error: 'message' field is required and cannot be empty.";

/// Exact body sent when no candidate model produced a reply. Upstream detail
/// never reaches the client.
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "Oops! Something went wrong while connecting to the AI. Please try again later.";

/// Everything a chat request can fail with.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid chat request")]
    InvalidInput,

    #[error(transparent)]
    Exhausted(#[from] Exhausted),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RequestError::InvalidInput => (StatusCode::BAD_REQUEST, VALIDATION_MESSAGE),
            RequestError::Exhausted(exhausted) => {
                // Full attempt detail stays in the log.
                error!("chat dispatch failed: {exhausted}");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_MESSAGE)
            }
        };
        (status, Json(ApiResponse::error(message))).into_response()
    }
}
