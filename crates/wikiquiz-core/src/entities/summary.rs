use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::QuizId;
use crate::timestamp;

/// Lightweight list-row projection of a quiz, as returned by `GET /history`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizSummary {
    pub id: QuizId,
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    #[serde(default, with = "timestamp::lenient_utc_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub date_generated: Option<DateTime<Utc>>,
}

impl QuizSummary {
    /// Title for display, falling back to the article URL.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.url)
    }

    /// Generation date as `YYYY-MM-DD`, or `N/A` when unknown.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date_generated
            .map_or_else(|| "N/A".to_string(), |date| date.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_row_with_backend_extras_deserializes() {
        let row: QuizSummary = serde_json::from_str(
            r#"{
                "id": 4,
                "url": "https://en.wikipedia.org/wiki/Cat",
                "title": "Cat",
                "date_generated": "2025-03-14T09:26:53.589+00:00",
                "scraped_content": "...",
                "full_quiz_data": "{}"
            }"#,
        )
        .unwrap();
        assert_eq!(row.id, 4);
        assert_eq!(row.display_title(), "Cat");
        assert_eq!(row.display_date(), "2025-03-14");
    }

    #[test]
    fn null_title_and_date_fall_back() {
        let row: QuizSummary = serde_json::from_str(
            r#"{"id": 1, "url": "https://en.wikipedia.org/wiki/Dog", "title": null, "date_generated": null}"#,
        )
        .unwrap();
        assert_eq!(row.display_title(), "https://en.wikipedia.org/wiki/Dog");
        assert_eq!(row.display_date(), "N/A");
    }
}
