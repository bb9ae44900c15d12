//! Detail view resolver for quizzes picked from the history list.

use std::sync::Arc;

use tokio::sync::watch;
use wikiquiz_client::QuizApi;
use wikiquiz_core::entities::QuizId;
use wikiquiz_core::errors::Failure;
use wikiquiz_core::state::DetailViewState;

use crate::failure::categorize;
use crate::fence::{Fence, InFlight};

/// Result of an [`DetailResolver::open`] that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The quiz is now shown as [`DetailViewState::Open`].
    Opened,
    /// The view was closed or another id was opened first; the result was
    /// dropped.
    Discarded,
}

pub struct DetailResolver<A> {
    api: Arc<A>,
    state: watch::Sender<DetailViewState>,
    fence: Fence,
}

impl<A: QuizApi> DetailResolver<A> {
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(DetailViewState::Closed);
        Self {
            api,
            state,
            fence: Fence::new(),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DetailViewState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> DetailViewState {
        self.state.borrow().clone()
    }

    /// Load quiz `id` into the detail view.
    ///
    /// Supersedes any open still loading. On failure the view returns to
    /// `Closed` and the failure is handed back for a blocking notice. If the
    /// returned future is dropped while loading, the view closes.
    ///
    /// # Errors
    ///
    /// Returns the categorized [`Failure`] when the fetch fails and this open
    /// is still the current one.
    pub async fn open(&self, id: QuizId) -> Result<OpenOutcome, Failure> {
        let mut token = 0;
        self.state.send_modify(|state| {
            token = self.fence.issue();
            *state = DetailViewState::Loading { id };
        });
        tracing::debug!(id, token, "loading quiz detail");

        let in_flight = InFlight::new(&self.fence, &self.state, token, |state| {
            *state = DetailViewState::Closed;
        });
        let result = self.api.quiz(id).await;
        in_flight.settle();
        let mut failure = None;
        let applied = self.state.send_if_modified(|state| {
            if !self.fence.is_current(token) {
                return false;
            }
            match &result {
                Ok(response) => {
                    *state = DetailViewState::Open {
                        quiz: response.clone().into_quiz(id),
                    };
                }
                Err(error) => {
                    failure = Some(categorize(error));
                    *state = DetailViewState::Closed;
                }
            }
            true
        });

        if !applied {
            tracing::warn!(id, token, "discarding stale quiz detail");
            return Ok(OpenOutcome::Discarded);
        }
        match failure {
            Some(failure) => {
                tracing::debug!(id, category = %failure.category, "quiz detail failed");
                Err(failure)
            }
            None => Ok(OpenOutcome::Opened),
        }
    }

    /// Close the view. Any open still in flight is ignored when it resolves.
    pub fn close(&self) {
        self.state.send_modify(|state| {
            self.fence.invalidate();
            *state = DetailViewState::Closed;
        });
    }
}
