//! Input debouncing
//!
//! A [`Debouncer`] holds at most one pending delayed task. Every trigger
//! aborts the pending task and schedules the new one, so only the last
//! trigger inside the delay window runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use srb_core::debounce::Debouncer;
//!
//! let mut debouncer = Debouncer::from_millis(config.search.debounce_ms);
//! debouncer.trigger(move || run_search(query));
//! ```

use std::time::Duration;
use tokio::task::JoinHandle;

/// Cancel-then-reschedule delayed task runner
///
/// Must be triggered from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Create a debouncer from a millisecond delay, as stored in configuration
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// The configured quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task` after the delay, superseding any pending task
    pub fn trigger<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.cancel() {
            tracing::trace!("Superseded pending debounced task");
        }

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        }));
    }

    /// Drop the pending task. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Whether a task is scheduled and has not run yet
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
