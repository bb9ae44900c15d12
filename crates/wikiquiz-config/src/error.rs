//! Errors raised while resolving [`crate::QuizConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape.
    #[error("failed to read wikiquiz configuration: {0}")]
    Figment(#[from] figment::Error),

    /// Extraction succeeded but a value is unusable.
    #[error("bad value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },

    /// A dotenv file exists but could not be applied.
    #[error("failed to load {path}: {source}")]
    Dotenv {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}
