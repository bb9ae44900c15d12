//! Wire envelopes for the quiz backend's JSON API.
//!
//! - `POST /generate_quiz` → [`GenerateQuizRequest`] / [`GenerateQuizResponse`]
//! - `GET /history` → [`HistoryResponse`]
//! - `GET /quiz/{id}` → [`QuizDetailResponse`]
//! - 4xx/5xx bodies → [`ErrorBody`]

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Quiz, QuizId, QuizSummary};
use crate::timestamp;

/// Body of `POST /generate_quiz`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GenerateQuizRequest {
    pub url: String,
    /// Ask for 15 questions instead of 10. Advisory only.
    #[serde(default)]
    pub extra_questions: bool,
}

/// Response from `POST /generate_quiz`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GenerateQuizResponse {
    pub quiz: Quiz,
    /// Id of the stored record.
    #[serde(default)]
    pub id: Option<QuizId>,
    /// Whether the backend served a previously generated quiz.
    #[serde(default)]
    pub cached: bool,
}

/// Response from `GET /history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryResponse {
    #[serde(default)]
    pub quizzes: Vec<QuizSummary>,
}

/// Record metadata attached to `GET /quiz/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizMeta {
    pub id: QuizId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, with = "timestamp::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub date_generated: Option<DateTime<Utc>>,
}

/// Response from `GET /quiz/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizDetailResponse {
    pub quiz: Quiz,
    #[serde(default)]
    pub meta: Option<QuizMeta>,
}

impl GenerateQuizResponse {
    /// The quiz with `id` and `url` filled from the envelope and request.
    #[must_use]
    pub fn into_quiz(self, requested_url: &str) -> Quiz {
        self.quiz.with_envelope(self.id, Some(requested_url))
    }
}

impl QuizDetailResponse {
    /// The quiz with `id`, `url`, and a missing title filled from `meta`.
    #[must_use]
    pub fn into_quiz(self, requested_id: QuizId) -> Quiz {
        let Some(meta) = self.meta else {
            return self.quiz.with_envelope(Some(requested_id), None);
        };
        let mut quiz = self.quiz.with_envelope(Some(meta.id), meta.url.as_deref());
        if quiz.title.is_empty()
            && let Some(title) = meta.title
        {
            quiz.title = title;
        }
        quiz
    }
}

/// Error body returned with 4xx/5xx statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Extract `detail` from a raw body. Non-JSON bodies and bodies where
    /// `detail` is not a string (validation error arrays) yield `None`.
    #[must_use]
    pub fn detail_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|parsed| parsed.detail)
    }
}
