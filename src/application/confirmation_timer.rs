//! Single-slot cancellable timer for the copy confirmation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Identifies one arming of a [`ConfirmationTimer`].
///
/// A callback may have been woken just before it was superseded; it checks
/// [`TimerTicket::is_current`] before touching shared state.
#[derive(Debug, Clone)]
pub struct TimerTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl TimerTicket {
    /// Returns true if no later arm or cancel has happened.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// Owns at most one pending scheduled callback.
///
/// [`ConfirmationTimer::arm`] aborts the pending task before spawning the new one,
/// so repeated arming never leaves two callbacks racing. Dropping the timer
/// cancels whatever is pending.
///
/// Requires a running tokio runtime.
#[derive(Debug, Default)]
pub struct ConfirmationTimer {
    pending: Mutex<Option<JoinHandle<()>>>,
    generation: Arc<AtomicU64>,
}

impl ConfirmationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `on_elapsed` after `delay`, replacing any pending callback.
    pub fn arm<F>(&self, delay: Duration, on_elapsed: F)
    where
        F: FnOnce(TimerTicket) + Send + 'static,
    {
        let ticket = TimerTicket {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
            current: Arc::clone(&self.generation),
        };

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if ticket.is_current() {
                on_elapsed(ticket);
            }
        }));
    }

    /// Cancels the pending callback, if any.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);

        if let Some(previous) = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            previous.abort();
        }
    }

    /// Returns true while a callback is scheduled and has not yet run.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ConfirmationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
