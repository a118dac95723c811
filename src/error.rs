//! Error type shared by every client operation

use reqwest::StatusCode;
use thiserror::Error as ThisError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(ThisError, Debug)]
pub enum ApiError {
    /// A required input was missing
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Connection failure or failure while reading the response body
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("Backend returned {status}: {payload}")]
    Backend { status: StatusCode, payload: String },

    /// The response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing a downloaded file to disk failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// What gets logged for a failed call: the backend's error payload when
    /// it sent one, otherwise the error message.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Backend { payload, .. } if !payload.is_empty() => payload.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }
}
