//! Entity structs for the wikiquiz domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! travel over the backend's JSON API and be validated against their schema.

mod question;
mod quiz;
mod summary;

pub use question::Question;
pub use quiz::{Quiz, QuizId};
pub use summary::QuizSummary;
