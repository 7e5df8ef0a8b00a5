//! Authority failure taxonomy
//!
//! Every failed authority call collapses into one of four outcomes. The
//! protocol layer converts these into user-visible status text; nothing
//! propagates past it.

use std::fmt;

/// Classified failure from the game authority
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 422: the server-side dictionary rejected the guess. Carries the
    /// server's `detail` message when present.
    ValidationRejected(String),
    /// 404: session id unknown or expired
    SessionNotFound,
    /// 409: give-up on a game that already ended
    SessionAlreadyEnded,
    /// Network failure, parse failure, or any unclassified response
    Transport(String),
}

impl ApiError {
    /// Status text shown to the user for this failure
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationRejected(detail) => detail.clone(),
            Self::SessionNotFound => "Game not found.".to_string(),
            Self::SessionAlreadyEnded => "Game already ended.".to_string(),
            Self::Transport(_) => "Something went wrong. Try again.".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationRejected(detail) => write!(f, "guess rejected: {detail}"),
            Self::SessionNotFound => write!(f, "session not found"),
            Self::SessionAlreadyEnded => write!(f, "session already ended"),
            Self::Transport(detail) => write!(f, "transport failure: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
