//! Error types for the search crate.
//!
//! Store failures never escape the engines; they are recovered and logged.
//! They surface only from direct store calls and store construction.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Result type alias for catalog store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while configuring or feeding the engines.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid engine settings
    #[cfg(feature = "engine")]
    #[error("Invalid settings: {0}")]
    Config(#[from] catalog_core::Error),

    /// Malformed JSON input
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures reported by a catalog store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store could not be reached
    #[error("Catalog store unavailable: {0}")]
    Unavailable(String),

    /// The store has no text index to run a native search against
    #[error("Text index missing: {0}")]
    IndexMissing(String),

    /// The store answered with an error
    #[error("Catalog backend error: {0}")]
    Backend(String),

    /// The store did not answer in time
    #[error("Catalog store timed out after {0:?}")]
    Timeout(Duration),
}

#[cfg(feature = "engine")]
impl From<StoreError> for catalog_core::Error {
    fn from(err: StoreError) -> Self {
        use catalog_core::{Error, ErrorCode};

        let message = err.to_string();
        let converted = match &err {
            StoreError::Unavailable(_) => Error::store_unavailable(message),
            StoreError::IndexMissing(_) => Error::new(ErrorCode::StoreIndexMissing, message),
            StoreError::Backend(_) => Error::store(message),
            StoreError::Timeout(_) => Error::new(ErrorCode::StoreTimeout, message),
        };
        converted.with_source(err)
    }
}
