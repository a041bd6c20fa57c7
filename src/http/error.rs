//! # API Errors
//!
//! Translation of request and store outcomes into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-facing failure outcomes.
///
/// The first three map to specific 4xx statuses with fixed bodies.
/// `Internal` covers backend faults; its detail is logged server-side and
/// never leaks to the client.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request shape did not match the declared schema.
    #[error("{0}")]
    Validation(String),

    /// Document-store id failed the backend's format check.
    #[error("Invalid ID format")]
    InvalidId,

    /// No record matches the given id.
    #[error("Resource not found")]
    NotFound,

    /// Backend connectivity or query failure.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::InvalidId => ApiError::InvalidId,
            StoreError::Backend(detail) => {
                tracing::error!(error = %detail, "store backend failure");
                ApiError::Internal
            }
        }
    }
}

/// Error response body.
///
/// Exactly one field, so the pinned wire bodies
/// (`{"error":"Resource not found"}` etc.) match byte-for-byte.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_pinned_messages() {
        assert_eq!(ApiError::NotFound.to_string(), "Resource not found");
        assert_eq!(ApiError::InvalidId.to_string(), "Invalid ID format");
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
    }

    #[test]
    fn test_store_outcome_mapping() {
        assert!(matches!(
            ApiError::from(StoreError::NotFound),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(StoreError::InvalidId),
            ApiError::InvalidId
        ));
        assert!(matches!(
            ApiError::from(StoreError::Backend("boom".to_string())),
            ApiError::Internal
        ));
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = ApiError::from(ValidationError::MissingField("description"));
        assert_eq!(
            err.to_string(),
            "body must have required property 'description'"
        );
    }
}
