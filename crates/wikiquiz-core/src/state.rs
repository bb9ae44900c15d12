//! Observable state published by the session engine.
//!
//! Each component owns exactly one of these and publishes every transition
//! to its subscribers.
//!
//! ```text
//! SessionState:     idle → loading → success
//!                                  → error
//!                   idle → error            (validation, no request)
//!                   success | error → loading (new attempt)
//!
//! DetailViewState:  closed → loading(id) → open(quiz)
//!                                        → closed (failure)
//!                   any → closed (close)
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Quiz, QuizId, QuizSummary};
use crate::errors::Failure;

/// State of the quiz generation flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Success { quiz: Quiz },
    Error { failure: Failure },
}

impl SessionState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn quiz(&self) -> Option<&Quiz> {
        match self {
            Self::Success { quiz } => Some(quiz),
            _ => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Error { failure } => Some(failure),
            _ => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the history detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailViewState {
    #[default]
    Closed,
    Loading { id: QuizId },
    Open { quiz: Quiz },
}

impl DetailViewState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Loading { .. } => "loading",
            Self::Open { .. } => "open",
        }
    }

    /// Id being loaded, if any.
    #[must_use]
    pub const fn loading_id(&self) -> Option<QuizId> {
        match self {
            Self::Loading { id } => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn quiz(&self) -> Option<&Quiz> {
        match self {
            Self::Open { quiz } => Some(quiz),
            _ => None,
        }
    }
}

impl fmt::Display for DetailViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading { id } => write!(f, "loading({id})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// State of the background history refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingState {
    /// Latest history list, newest first as ordered by the backend.
    pub quizzes: Vec<QuizSummary>,
    /// Whether the recurring schedule is running.
    pub active: bool,
    /// When `quizzes` was last replaced by a successful fetch.
    pub last_refreshed: Option<DateTime<Utc>>,
}
