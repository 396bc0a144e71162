//! Error types for the sheet API client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the sheet API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection refused, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a status code other than 200
    #[error("HTTP error (status {status}): {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// The API answered 200 with a body that is not valid JSON
    #[error("invalid JSON response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Create a protocol error from a status code and body text
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Check if this error is a transport timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status >= 500)
    }
}
