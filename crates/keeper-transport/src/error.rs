//! Transport error types.

use thiserror::Error;

/// Failure of a single API call.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a non-success status
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        /// Message field extracted from the response body, if any
        server_message: Option<String>,
    },

    /// No connection could be made
    #[error("Network unavailable")]
    NetworkUnavailable,

    /// The request exceeded the transport timeout
    #[error("Request timed out")]
    Timeout,

    /// Any other reqwest failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The success body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint path could not be joined onto the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl TransportError {
    /// Shorthand for a status rejection.
    pub fn rejected(status: u16, server_message: Option<&str>) -> Self {
        TransportError::Rejected {
            status,
            server_message: server_message.map(str::to_string),
        }
    }

    /// HTTP status of the rejection, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Rejected { status, .. } => Some(*status),
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The user-facing message for this failure.
    pub fn user_message(&self) -> String {
        crate::normalize(self)
    }
}

/// Result type alias using TransportError.
pub type TransportResult<T> = Result<T, TransportError>;
