//! Error types shared across layers.
//!
//! - [`StorageError`] is returned by the persistence seam (repository traits).
//! - [`AppError`] is returned by workflows and rendered as the JSON error body.
//!
//! Workflows never let a [`StorageError`] reach the HTTP boundary: every storage
//! failure is re-classified into an [`AppError`] variant first.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::response::ApiResponse;

/// Stable client-facing error messages.
pub mod messages {
    pub const INVALID_REQUEST: &str = "invalid request";
    pub const INVALID_ALIAS: &str = "invalid alias";
    pub const URL_NOT_FOUND: &str = "url not found";
    pub const INTERNAL_ERROR: &str = "internal error";
    pub const URL_REQUIRED: &str = "field URL is a required field";
    pub const URL_INVALID: &str = "field URL is not a valid URL";
    pub const FAILED_TO_ADD_URL: &str = "failed to add url";
}

/// Failure reported by a URL store.
///
/// The variant is the error kind; callers match on it instead of comparing
/// messages.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("alias '{0}' already exists")]
    DuplicateAlias(String),

    #[error("alias '{0}' not found")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Workflow outcome surfaced to the API layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code used when rendering this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::error(self.to_string());

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_by_kind() {
        assert_eq!(
            AppError::bad_request(messages::INVALID_REQUEST).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found(messages::URL_NOT_FOUND).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict(messages::FAILED_TO_ADD_URL).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::internal(messages::INTERNAL_ERROR).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::bad_request(messages::URL_REQUIRED);
        assert_eq!(err.to_string(), "field URL is a required field");
    }

    #[test]
    fn test_storage_error_from_sqlx() {
        let err: StorageError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StorageError::Backend(_)));
    }
}
