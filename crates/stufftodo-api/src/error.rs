//! API error types.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use stufftodo_worklist::WorklistError;

use crate::views;

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error type for consistent error responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller may not view or modify the requested worklist.
    #[error("forbidden")]
    Forbidden,

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request - invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // The unauthorized page is the same in every response format.
            ApiError::Forbidden => (status, Html(views::pages::unauthorized())).into_response(),
            other => {
                let body = Json(json!({
                    "error": other.to_string()
                }));
                (status, body).into_response()
            }
        }
    }
}

impl From<WorklistError> for ApiError {
    fn from(err: WorklistError) -> Self {
        match err {
            WorklistError::InvalidIssueId(id) => {
                ApiError::BadRequest(format!("invalid issue id: {}", id))
            }
            WorklistError::LockPoisoned(msg) => ApiError::Internal(msg),
        }
    }
}
