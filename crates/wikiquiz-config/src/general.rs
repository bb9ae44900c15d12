//! Defaults applied to every quiz request.

use serde::{Deserialize, Serialize};

/// `[general]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Ask for 15 questions instead of 10 unless the caller says otherwise.
    #[serde(default)]
    pub extra_questions: bool,
}
