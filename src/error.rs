//! Error types for the blog API
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these errors come from the post store and request validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Blog Error Enum ==
/// Unified error type for the blog API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    /// Post not found in the store
    #[error("Post not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Write conflicts with existing data
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::NotFound(_) => StatusCode::NOT_FOUND,
            BlogError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            BlogError::Conflict(_) => StatusCode::CONFLICT,
            BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the blog API.
pub type Result<T> = std::result::Result<T, BlogError>;
