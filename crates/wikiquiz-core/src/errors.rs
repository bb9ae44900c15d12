//! Cross-cutting error types for wikiquiz.
//!
//! [`CoreError`] covers misuse of core types (bad selection indices, options a
//! question does not offer). [`Failure`] is the user-facing outcome of a
//! failed generation or detail request: it is displayed, never re-thrown.
//! Transport errors live in `wikiquiz-client` and are mapped onto
//! [`ErrorCategory`] by `wikiquiz-session`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::InvalidUrl;

/// Fallback shown for a 4xx response without a usable `detail`.
pub const CLIENT_FALLBACK_MESSAGE: &str =
    "Failed to access Wikipedia. Please check the URL and your internet connection.";

/// Shown for any 5xx response; the server detail is not surfaced.
pub const SERVER_ERROR_MESSAGE: &str = "Quiz generation failed. Please try again in a moment.";

/// Shown when no response reached the client.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Errors raised by core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A selection referenced a question index past the end of the quiz.
    #[error("Question index {index} out of range (quiz has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },

    /// A selection named an option the question does not offer.
    #[error("Option '{option}' is not offered by question {index}")]
    UnknownOption { index: usize, option: String },
}

/// Category of a failed quiz request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Rejected on the client before any request was made.
    Validation,
    /// The backend answered with a 4xx status.
    Client,
    /// The backend answered with a 5xx status or an unusable body.
    Server,
    /// No response was received (timeout, DNS, connection refused).
    Network,
}

impl ErrorCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Client => "client",
            Self::Server => "server",
            Self::Network => "network",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized, displayable failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Failure {
    pub category: ErrorCategory,
    pub message: String,
}

impl Failure {
    #[must_use]
    pub fn validation(reason: InvalidUrl) -> Self {
        Self {
            category: ErrorCategory::Validation,
            message: reason.to_string(),
        }
    }

    /// A 4xx failure. Uses the server's `detail` verbatim unless it is
    /// missing or blank, otherwise the fixed fallback.
    #[must_use]
    pub fn client(detail: Option<&str>) -> Self {
        let message = detail
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or(CLIENT_FALLBACK_MESSAGE);
        Self {
            category: ErrorCategory::Client,
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn server() -> Self {
        Self {
            category: ErrorCategory::Server,
            message: SERVER_ERROR_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn network() -> Self {
        Self {
            category: ErrorCategory::Network,
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
