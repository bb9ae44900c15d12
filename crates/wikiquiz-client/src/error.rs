//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the quiz backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// No response was received (timeout, DNS failure, connection refused).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The `detail` field of the error body, when present.
        detail: Option<String>,
    },

    /// A success response carried a body that could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request never produced a response.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Build(_) | Self::Transport(_))
    }

    /// Classify an error raised while reading a response body.
    pub(crate) fn from_body(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error)
        }
    }
}
