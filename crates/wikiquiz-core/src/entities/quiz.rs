use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Question;

/// Backend-assigned quiz identifier.
pub type QuizId = i64;

/// A full quiz record: article metadata, questions, and an optional study
/// summary.
///
/// The AI payload stored by the backend carries neither `id` nor `url`; the
/// client fills them from the surrounding response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Quiz {
    #[serde(default)]
    pub id: Option<QuizId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_summary: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// The study summary, treating a blank string the same as an absent one.
    #[must_use]
    pub fn study_summary(&self) -> Option<&str> {
        self.study_summary
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Number of questions in the quiz.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Fill `id` and `url` from envelope metadata where the payload lacks them.
    #[must_use]
    pub fn with_envelope(mut self, id: Option<QuizId>, url: Option<&str>) -> Self {
        if self.id.is_none() {
            self.id = id;
        }
        if self.url.is_empty()
            && let Some(url) = url
        {
            self.url = url.to_string();
        }
        self
    }
}
