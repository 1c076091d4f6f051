//! Error types for the Bookclub admin API client.

use thiserror::Error;

/// Errors that can occur when talking to the Bookclub server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Authentication required but the token was missing or rejected
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
