//! # Store Errors
//!
//! Outcome taxonomy shared by both store adapters.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure outcomes of a store operation.
///
/// `NotFound` and `InvalidId` are expected, client-facing outcomes; the
/// HTTP layer maps them to 404 and 400. `Backend` covers connectivity and
/// query faults and surfaces as an opaque 500. No operation is retried.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Well-formed request, no matching record.
    #[error("resource not found")]
    NotFound,

    /// Identifier does not match the backend's accepted format.
    ///
    /// Only produced by the document adapter; the relational namespace
    /// rejects non-integer ids before the store is reached.
    #[error("invalid resource id")]
    InvalidId,

    /// Connectivity or query failure in the underlying driver.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Backend(other.to_string()),
        }
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
