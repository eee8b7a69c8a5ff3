//! Error types for the catalog API client

use catalog_search::StoreError;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend error code reported when the catalog has no text index
pub const TEXT_INDEX_MISSING: &str = "TEXT_INDEX_MISSING";

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned a non-success HTTP status
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// API answered 2xx but flagged the request as failed
    #[error("Catalog service error [{code}]: {message}")]
    Backend {
        /// Machine-readable error code
        code: String,
        /// Error message from API
        message: String,
    },

    /// Circuit breaker is open
    #[error("Circuit breaker is open - catalog service temporarily unavailable")]
    CircuitOpen,

    /// Request timeout
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// All retry attempts exhausted
    #[error("All {attempts} retry attempts failed: {last_error}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Last error message
        last_error: String,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            Self::ApiResponse { status, .. } => *status >= 500 || *status == 429,
            Self::Timeout(_) => true,
            Self::CircuitOpen
            | Self::Config(_)
            | Self::Backend { .. }
            | Self::RetriesExhausted { .. } => false,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }
}

impl From<ApiError> for StoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Backend { ref code, ref message } if code == TEXT_INDEX_MISSING => {
                StoreError::IndexMissing(message.clone())
            }
            ApiError::Timeout(duration) => StoreError::Timeout(duration),
            ApiError::Request(ref e) if e.is_connect() => StoreError::Unavailable(err.to_string()),
            ApiError::CircuitOpen | ApiError::RetriesExhausted { .. } => {
                StoreError::Unavailable(err.to_string())
            }
            ApiError::ApiResponse { status: 503, .. } => StoreError::Unavailable(err.to_string()),
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(ApiError::api_response(503, "down").is_retryable());
        assert!(ApiError::api_response(429, "slow down").is_retryable());
        assert!(!ApiError::api_response(404, "missing").is_retryable());
        assert!(ApiError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(!ApiError::CircuitOpen.is_retryable());
    }

    #[test]
    fn test_status_classes() {
        assert!(ApiError::api_response(400, "bad").is_client_error());
        assert!(ApiError::api_response(502, "bad gateway").is_server_error());
        assert!(!ApiError::api_response(502, "bad gateway").is_client_error());
    }

    #[test]
    fn test_store_error_mapping() {
        let missing = ApiError::Backend {
            code: TEXT_INDEX_MISSING.to_string(),
            message: "no text index on items".to_string(),
        };
        assert!(matches!(StoreError::from(missing), StoreError::IndexMissing(_)));

        assert!(matches!(StoreError::from(ApiError::CircuitOpen), StoreError::Unavailable(_)));
        assert!(matches!(
            StoreError::from(ApiError::Timeout(Duration::from_secs(3))),
            StoreError::Timeout(d) if d == Duration::from_secs(3)
        ));
        assert!(matches!(
            StoreError::from(ApiError::api_response(500, "oops")),
            StoreError::Backend(_)
        ));
    }
}
