//! Handle to a running countdown.

use crate::error::{TimerError, TimerResult};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How a countdown ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// All ticks elapsed and the alarm was published to `delivered` observers.
    Fired { ticks: u32, delivered: usize },

    /// Cancelled after `ticks` tick indications; nothing was published.
    Cancelled { ticks: u32 },
}

impl TimerOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, TimerOutcome::Fired { .. })
    }

    pub fn ticks(&self) -> u32 {
        match self {
            TimerOutcome::Fired { ticks, .. } | TimerOutcome::Cancelled { ticks } => *ticks,
        }
    }
}

/// Returned by [`Timer::start`](crate::Timer::start).
///
/// Dropping the handle detaches the countdown; it keeps running until the
/// alarm fires or the runtime shuts down.
#[derive(Debug)]
pub struct TimerHandle {
    canceller: Canceller,
    task: JoinHandle<TimerResult<TimerOutcome>>,
}

impl TimerHandle {
    pub(crate) fn new(
        cancel: watch::Sender<bool>,
        task: JoinHandle<TimerResult<TimerOutcome>>,
    ) -> Self {
        Self {
            canceller: Canceller(Arc::new(cancel)),
            task,
        }
    }

    /// Ask the countdown to stop. Takes effect at the current or next tick
    /// wait; has no effect once the alarm is being published.
    pub fn cancel(&self) {
        self.canceller.cancel();
    }

    /// A cloneable way to cancel, usable after the handle moved into
    /// [`wait`](TimerHandle::wait).
    pub fn canceller(&self) -> Canceller {
        self.canceller.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the countdown to end.
    pub async fn wait(self) -> TimerResult<TimerOutcome> {
        self.task
            .await
            .map_err(|e| TimerError::TaskFailed(e.to_string()))?
    }
}

/// Cancels the countdown it was taken from.
#[derive(Debug, Clone)]
pub struct Canceller(Arc<watch::Sender<bool>>);

impl Canceller {
    pub fn cancel(&self) {
        // the receiver is gone once the countdown finished
        let _ = self.0.send(true);
    }
}

/// Resolves once a cancellation is requested. Never resolves if the
/// sender is dropped without cancelling.
pub(crate) async fn cancelled(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
