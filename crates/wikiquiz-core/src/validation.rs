//! Article URL validation.
//!
//! Deliberately permissive: the only checks are "not blank" and "mentions
//! `wikipedia.org`". Scheme and path are left to the backend.

use thiserror::Error;

/// Domain fragment every accepted article URL must contain.
pub const WIKIPEDIA_DOMAIN: &str = "wikipedia.org";

/// Why an article URL was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidUrl {
    /// Input is empty or whitespace only.
    #[error("Please enter a Wikipedia URL")]
    Empty,
    /// Input does not contain [`WIKIPEDIA_DOMAIN`].
    #[error("Please enter a valid Wikipedia URL")]
    NotWikipedia,
}

impl InvalidUrl {
    /// Short machine-readable reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NotWikipedia => "not-wikipedia",
        }
    }
}

/// Validate user input as a Wikipedia article URL.
///
/// # Errors
///
/// Returns [`InvalidUrl::Empty`] for blank input, then
/// [`InvalidUrl::NotWikipedia`] if the domain fragment is missing.
pub fn validate_article_url(input: &str) -> Result<(), InvalidUrl> {
    if input.trim().is_empty() {
        return Err(InvalidUrl::Empty);
    }
    if !input.contains(WIKIPEDIA_DOMAIN) {
        return Err(InvalidUrl::NotWikipedia);
    }
    Ok(())
}
