//! Error types for the Gate client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Gate client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// A pipeline looked up by id has no history entry to return
    ///
    /// The only error this client manufactures itself; everything else is
    /// forwarded from the transport.
    #[error("Could not find pipeline {0}")]
    PipelineNotFound(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PipelineNotFound(_))
            || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_not_found_message() {
        let err = ClientError::PipelineNotFound("abc123".to_string());
        assert_eq!(err.to_string(), "Could not find pipeline abc123");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_api_error_classification() {
        let err = ClientError::api_error(404, "no such pipeline");
        assert!(err.is_not_found());
        assert!(err.is_client_error());
        assert!(!err.is_server_error());

        let err = ClientError::api_error(500, "boom");
        assert!(!err.is_not_found());
        assert!(!err.is_client_error());
        assert!(err.is_server_error());
    }
}
