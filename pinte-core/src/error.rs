//! Error types for the Pinte client.

use thiserror::Error;

/// Errors that can occur while talking to the remote endpoint or loading config.
#[derive(Error, Debug)]
pub enum PinteError {
    #[error("API request failed with status {status}")]
    RequestFailed { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

impl PinteError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            PinteError::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PinteError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            PinteError::RequestFailed {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            PinteError::Parse(err.to_string())
        } else {
            PinteError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PinteError {
    fn from(err: serde_json::Error) -> Self {
        PinteError::Parse(err.to_string())
    }
}

/// Result type alias for Pinte operations.
pub type PinteResult<T> = Result<T, PinteError>;
