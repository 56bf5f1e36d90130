//! REST client error type.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure talking to the REST API.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    /// The API rejected the bearer token or the credentials.
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("account has no usable role")]
    NoUsableRole,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-OK HTTP status.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Status { status, detail }
        }
    }

    /// Short message suitable for a form banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) | Self::Unavailable => "Could not reach the server.".to_owned(),
            Self::Unauthorized => "Invalid username or password.".to_owned(),
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Status { status, detail: None } => format!("Request failed ({status})."),
            Self::Decode(_) => "Unexpected response from the server.".to_owned(),
            Self::NoUsableRole => "This account is not set up as a student or a trainer.".to_owned(),
        }
    }
}
