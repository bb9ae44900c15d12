//! Stderr spinner for backend calls that can take a while.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

const TICK: Duration = Duration::from_millis(100);

/// Spinner that clears itself when dropped unless [`Spinner::fail`] left a
/// message behind. Inert when progress output is disabled.
pub struct Spinner(Option<ProgressBar>);

impl Spinner {
    #[must_use]
    pub fn start(message: impl Into<String>) -> Self {
        if !ui::prefs().progress {
            return Self(None);
        }
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(message.into());
        bar.enable_steady_tick(TICK);
        Self(Some(bar))
    }

    /// Stop and keep `message` on screen.
    pub fn fail(mut self, message: impl Into<String>) {
        if let Some(bar) = self.0.take() {
            bar.abandon_with_message(message.into());
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(bar) = self.0.take() {
            bar.finish_and_clear();
        }
    }
}
