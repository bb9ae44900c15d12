//! Quiz generation controller.
//!
//! Drives [`SessionState`] through validate → request → success/error. At
//! most one generation is loading at a time: a submit while loading is a
//! no-op. Every accepted submit takes a fencing token, and its result is
//! applied only if that token is still current, so a result that completes
//! after [`GenerationController::reset`] never resurrects old state. Dropping
//! a `submit` future mid-request returns the controller to `Idle`.

use std::sync::Arc;

use tokio::sync::watch;
use wikiquiz_client::QuizApi;
use wikiquiz_core::errors::Failure;
use wikiquiz_core::responses::GenerateQuizRequest;
use wikiquiz_core::state::SessionState;
use wikiquiz_core::validation::{InvalidUrl, validate_article_url};

use crate::failure::categorize;
use crate::fence::{Fence, InFlight};

/// What happened to a single [`GenerationController::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A generation was already loading; nothing changed.
    Busy,
    /// Rejected by the URL validator; no request was made.
    Invalid(InvalidUrl),
    /// The quiz was generated and published as `Success`.
    Succeeded,
    /// The request failed and the failure was published as `Error`.
    Failed(Failure),
    /// The request finished after being superseded; its result was dropped.
    Superseded,
}

pub struct GenerationController<A> {
    api: Arc<A>,
    state: watch::Sender<SessionState>,
    fence: Fence,
}

impl<A: QuizApi> GenerationController<A> {
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        Self {
            api,
            state,
            fence: Fence::new(),
        }
    }

    /// Subscribe to state transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Validate `url` and, if valid, request a quiz for it.
    ///
    /// Issues exactly one request per accepted submit. Failures are published
    /// as [`SessionState::Error`] and reported in the outcome, never returned
    /// as errors.
    pub async fn submit(&self, url: &str, extra_questions: bool) -> SubmitOutcome {
        let mut admitted = None;
        let mut rejected = None;
        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            match validate_article_url(url) {
                Ok(()) => {
                    admitted = Some(self.fence.issue());
                    *state = SessionState::Loading;
                }
                Err(reason) => {
                    rejected = Some(reason);
                    *state = SessionState::Error {
                        failure: Failure::validation(reason),
                    };
                }
            }
            true
        });

        if let Some(reason) = rejected {
            tracing::debug!(reason = reason.as_str(), "article url rejected");
            return SubmitOutcome::Invalid(reason);
        }
        let Some(token) = admitted else {
            tracing::debug!("generation already loading, ignoring submit");
            return SubmitOutcome::Busy;
        };

        let request = GenerateQuizRequest {
            url: url.trim().to_string(),
            extra_questions,
        };
        tracing::debug!(token, url = %request.url, extra_questions, "generation started");
        let in_flight = InFlight::new(&self.fence, &self.state, token, |state| {
            *state = SessionState::Idle;
        });
        let result = self.api.generate_quiz(&request).await;
        in_flight.settle();

        let (next, outcome) = match result {
            Ok(response) => {
                let quiz = response.into_quiz(&request.url);
                tracing::debug!(token, questions = quiz.len(), "generation succeeded");
                (SessionState::Success { quiz }, SubmitOutcome::Succeeded)
            }
            Err(error) => {
                let failure = categorize(&error);
                tracing::debug!(token, %error, category = %failure.category, "generation failed");
                (
                    SessionState::Error {
                        failure: failure.clone(),
                    },
                    SubmitOutcome::Failed(failure),
                )
            }
        };

        let applied = self.state.send_if_modified(|state| {
            if !self.fence.is_current(token) {
                return false;
            }
            *state = next;
            true
        });
        if applied {
            outcome
        } else {
            tracing::warn!(token, "discarding superseded generation result");
            SubmitOutcome::Superseded
        }
    }

    /// Return to `Idle`, clearing any quiz or error and invalidating an
    /// in-flight request.
    pub fn reset(&self) {
        self.state.send_modify(|state| {
            self.fence.invalidate();
            *state = SessionState::Idle;
        });
    }
}
