//! Error types for watchlist operations
//!
//! One enum covers the service boundary so handlers never leak the storage
//! driver's error representation to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::database::DatabaseError;

/// Errors surfaced by the watchlist HTTP handlers
///
/// # Error Categories
///
/// - **Client errors**: `InvalidInput` (malformed JSON body)
/// - **State errors**: `NotFound`, `Conflict` (duplicate ticker)
/// - **Storage errors**: `Storage` (pool or query failure)
#[derive(Debug, Error)]
pub enum WatchlistError {
    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidInput(String),

    /// No stock matches the ticker
    ///
    /// Defined for the boundary; the current CRUD surface treats a missing
    /// ticker on update/delete as a silent no-op and never returns this.
    #[error("Stock not found: {0}")]
    NotFound(String),

    /// A stock with this ticker already exists
    #[error("Stock already exists: {0}")]
    Conflict(String),

    /// The storage layer failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<DatabaseError> for WatchlistError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::UniqueViolation(message) => WatchlistError::Conflict(message),
            other => WatchlistError::Storage(other.to_string()),
        }
    }
}

/// Convert WatchlistError to an HTTP response
///
/// Bodies are free-text error messages, matching the plain-text
/// confirmation messages on the success paths.
impl IntoResponse for WatchlistError {
    fn into_response(self) -> Response {
        let status = match &self {
            WatchlistError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            WatchlistError::NotFound(_) => StatusCode::NOT_FOUND,
            WatchlistError::Conflict(_) => StatusCode::CONFLICT,
            WatchlistError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
