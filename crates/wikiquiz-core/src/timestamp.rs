//! Serde helpers for timestamps produced by the quiz backend.
//!
//! The backend emits `isoformat()` strings whose shape depends on the database
//! driver: RFC 3339 with an offset, or a naive local timestamp with no offset.
//! Use with `#[serde(with = "timestamp::lenient_utc_option")]`. A value that
//! matches neither shape decodes as `None` so the surrounding record survives.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an RFC 3339 or naive ISO-8601 timestamp. Naive values are taken as UTC.
#[must_use]
pub fn parse_lenient(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// `Option<DateTime<Utc>>` serialized as an RFC 3339 string or `null`.
pub mod lenient_utc_option {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc, parse_lenient};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => s.serialize_some(&ts.to_rfc3339()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(text) = Option::<String>::deserialize(d)? else {
            return Ok(None);
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        let parsed = parse_lenient(&text);
        if parsed.is_none() {
            tracing::debug!(value = %text, "ignoring unrecognized timestamp");
        }
        Ok(parsed)
    }
}
