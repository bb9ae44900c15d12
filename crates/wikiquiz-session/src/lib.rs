//! # wikiquiz-session
//!
//! The client-side quiz engine: everything between user intent and the
//! backend, with no presentation concerns.
//!
//! - [`GenerationController`] validates an article URL, requests a quiz, and
//!   publishes [`SessionState`](wikiquiz_core::state::SessionState)
//! - [`HistoryPoller`] keeps the history list fresh on a fixed interval
//! - [`DetailResolver`] loads one stored quiz for the detail view
//!
//! Each component owns a `tokio::sync::watch` channel; presentation layers
//! call `subscribe()` and render whatever arrives. Results that complete
//! after the user moved on are fenced off and dropped.

mod detail;
mod failure;
mod fence;
mod generation;
mod poller;

pub use detail::{DetailResolver, OpenOutcome};
pub use failure::categorize;
pub use fence::Fence;
pub use generation::{GenerationController, SubmitOutcome};
pub use poller::{HistoryPoller, UpdateCallback};

use std::sync::Arc;

use wikiquiz_client::QuizApi;
use wikiquiz_config::QuizConfig;

/// The three engine components wired to one backend.
pub struct QuizSession<A> {
    pub generation: GenerationController<A>,
    pub history: HistoryPoller<A>,
    pub detail: DetailResolver<A>,
}

impl<A: QuizApi> QuizSession<A> {
    #[must_use]
    pub fn new(api: Arc<A>, config: &QuizConfig) -> Self {
        Self {
            generation: GenerationController::new(Arc::clone(&api)),
            history: HistoryPoller::new(Arc::clone(&api), &config.history),
            detail: DetailResolver::new(api),
        }
    }

    /// Stop background polling and close the detail view.
    pub fn shutdown(&self) {
        self.history.stop();
        self.detail.close();
    }
}
