//! Error types for backend query operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration error (missing env vars, invalid values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend answered with a non-success status
    #[error("Backend error {status}: {body}")]
    Status { status: u16, body: String },

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Transport-level failure
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for backend query operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error 502: bad gateway");
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(ApiError::Timeout(30).to_string(), "Request timed out after 30s");
    }
}
