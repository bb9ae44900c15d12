//! Fencing tokens for discarding stale asynchronous results.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

/// Monotonic token issuer. A result may be applied only while the token it
/// was started with is still current.
#[derive(Debug, Default)]
pub struct Fence {
    current: AtomicU64,
}

impl Fence {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
        }
    }

    /// Issue a new token, making every earlier token stale.
    pub fn issue(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Make every issued token stale without issuing a new one.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::SeqCst) == token
    }
}

/// Held across the await of a fenced request. If the owning future is
/// dropped before [`InFlight::settle`], the request is abandoned: its token
/// is invalidated and `rollback` is published, provided the token was still
/// current.
#[must_use = "dropping the guard abandons the request immediately"]
pub struct InFlight<'a, S> {
    fence: &'a Fence,
    state: &'a watch::Sender<S>,
    token: u64,
    rollback: Option<fn(&mut S)>,
}

impl<'a, S> InFlight<'a, S> {
    pub const fn new(
        fence: &'a Fence,
        state: &'a watch::Sender<S>,
        token: u64,
        rollback: fn(&mut S),
    ) -> Self {
        Self {
            fence,
            state,
            token,
            rollback: Some(rollback),
        }
    }

    /// The request completed; its result is applied by the caller.
    pub fn settle(mut self) {
        self.rollback = None;
    }
}

impl<S> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        let Some(rollback) = self.rollback.take() else {
            return;
        };
        let abandoned = self.state.send_if_modified(|state| {
            if !self.fence.is_current(self.token) {
                return false;
            }
            self.fence.invalidate();
            rollback(state);
            true
        });
        if abandoned {
            tracing::debug!(token = self.token, "request abandoned before completion");
        }
    }
}
