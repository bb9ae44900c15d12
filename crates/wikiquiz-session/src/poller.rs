//! Background refresh of the quiz history list.
//!
//! The poller fetches once on [`HistoryPoller::start`] and then once per
//! configured interval until [`HistoryPoller::stop`]. Each tick spawns its
//! own fetch, so a slow backend can have several in flight; completions are
//! sequenced and one older than the last applied result is dropped.
//!
//! Applying a result and stopping both hold the lifecycle lock. Once `stop()`
//! returns, nothing started under the previous `start()` can publish state or
//! reach the update callback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use wikiquiz_client::QuizApi;
use wikiquiz_config::HistoryConfig;
use wikiquiz_core::entities::QuizSummary;
use wikiquiz_core::errors::Failure;
use wikiquiz_core::state::PollingState;

use crate::failure::categorize;

/// Floor for the refresh period; `tokio::time::interval` rejects zero.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Invoked with the new list after every applied refresh.
///
/// Runs while the lifecycle lock is held, so it must not call back into the
/// poller.
pub type UpdateCallback = Box<dyn FnMut(&[QuizSummary]) + Send>;

struct Lifecycle {
    /// Bumped by every start and stop; scheduled fetches carry the epoch
    /// they were spawned under.
    epoch: u64,
    task: Option<JoinHandle<()>>,
    last_applied: u64,
    on_update: Option<UpdateCallback>,
}

struct Shared<A> {
    api: Arc<A>,
    state: watch::Sender<PollingState>,
    limit: u32,
    interval: Duration,
    seq: AtomicU64,
    lifecycle: Mutex<Lifecycle>,
}

pub struct HistoryPoller<A> {
    shared: Arc<Shared<A>>,
}

impl<A: QuizApi> HistoryPoller<A> {
    #[must_use]
    pub fn new(api: Arc<A>, config: &HistoryConfig) -> Self {
        let (state, _) = watch::channel(PollingState::default());
        let interval = config.poll_interval().max(MIN_INTERVAL);
        if interval != config.poll_interval() {
            tracing::warn!(
                configured_ms = config.poll_interval_ms,
                "history poll interval raised to the 1ms minimum"
            );
        }
        Self {
            shared: Arc::new(Shared {
                api,
                state,
                limit: config.limit,
                interval,
                seq: AtomicU64::new(0),
                lifecycle: Mutex::new(Lifecycle {
                    epoch: 0,
                    task: None,
                    last_applied: 0,
                    on_update: None,
                }),
            }),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PollingState> {
        self.shared.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> PollingState {
        self.shared.state.borrow().clone()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.shared.state.borrow().active
    }

    /// Begin polling: one fetch now, then one every interval.
    ///
    /// Returns `false` without side effects if the poller is already running.
    /// Must be called from within a tokio runtime.
    pub fn start(&self, on_update: Option<UpdateCallback>) -> bool {
        let mut lifecycle = self.shared.lock();
        if lifecycle.task.is_some() {
            tracing::debug!("history poller already running");
            return false;
        }
        lifecycle.epoch += 1;
        lifecycle.on_update = on_update;
        let epoch = lifecycle.epoch;
        lifecycle.task = Some(tokio::spawn(Shared::run(Arc::clone(&self.shared), epoch)));
        self.shared.state.send_modify(|state| state.active = true);
        tracing::debug!(
            epoch,
            interval_ms = self.shared.interval.as_millis(),
            "history poller started"
        );
        true
    }

    /// Stop polling. Idempotent.
    ///
    /// Fetches already in flight still complete but their results are
    /// dropped.
    pub fn stop(&self) {
        self.shared.stop();
    }

    /// Fetch the history once, outside the schedule.
    ///
    /// A successful result replaces the list and reaches the update callback
    /// exactly like a scheduled one, unless the poller is started or stopped
    /// while the fetch is in flight.
    ///
    /// # Errors
    ///
    /// Returns the categorized [`Failure`]; the list is left unchanged.
    pub async fn refresh_now(&self) -> Result<Vec<QuizSummary>, Failure> {
        let epoch = self.shared.lock().epoch;
        let seq = self.shared.next_seq();
        self.shared.fetch(seq, epoch).await
    }
}

impl<A> Drop for HistoryPoller<A> {
    fn drop(&mut self) {
        self.shared.stop();
    }
}

impl<A> Shared<A> {
    fn lock(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn stop(&self) {
        let mut lifecycle = self.lock();
        lifecycle.epoch += 1;
        lifecycle.on_update = None;
        if let Some(task) = lifecycle.task.take() {
            task.abort();
            tracing::debug!("history poller stopped");
        }
        self.state.send_if_modified(|state| {
            let was_active = state.active;
            state.active = false;
            was_active
        });
    }

    /// Publish `quizzes` unless the run that fetched them was stopped or a
    /// newer result has already landed.
    fn apply(&self, seq: u64, epoch: u64, quizzes: &[QuizSummary]) -> bool {
        let mut lifecycle = self.lock();
        if epoch != lifecycle.epoch {
            tracing::debug!(seq, epoch, "dropping history fetched by a stopped poller");
            return false;
        }
        if seq < lifecycle.last_applied {
            tracing::warn!(
                seq,
                last_applied = lifecycle.last_applied,
                "discarding out-of-order history"
            );
            return false;
        }
        lifecycle.last_applied = seq;
        self.state.send_modify(|state| {
            state.quizzes = quizzes.to_vec();
            state.last_refreshed = Some(Utc::now());
        });
        if let Some(on_update) = lifecycle.on_update.as_mut() {
            on_update(quizzes);
        }
        true
    }
}

impl<A: QuizApi> Shared<A> {
    async fn run(shared: Arc<Self>, epoch: u64) {
        let mut ticker = tokio::time::interval(shared.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let seq = shared.next_seq();
            let fetcher = Arc::clone(&shared);
            tokio::spawn(async move {
                let _ = fetcher.fetch(seq, epoch).await;
            });
        }
    }

    async fn fetch(&self, seq: u64, epoch: u64) -> Result<Vec<QuizSummary>, Failure> {
        match self.api.history(self.limit).await {
            Ok(response) => {
                self.apply(seq, epoch, &response.quizzes);
                Ok(response.quizzes)
            }
            Err(error) => {
                let failure = categorize(&error);
                tracing::warn!(seq, %error, category = %failure.category, "history refresh failed");
                Err(failure)
            }
        }
    }
}
