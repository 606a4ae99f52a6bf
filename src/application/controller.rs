//! Shortening interaction controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::confirmation_timer::ConfirmationTimer;
use crate::api::dto::shorten::ShortenResult;
use crate::domain::ShorteningService;
use crate::domain::entities::SubmissionState;
use crate::error::ShortenError;
use crate::infrastructure::clipboard::ClipboardService;
use crate::utils::url_validator::is_valid_url;

/// How long "Copied!" stays visible after the last successful copy.
pub const CONFIRMATION_RESET_DELAY: Duration = Duration::from_millis(2000);

/// How a call to [`ShorteningController::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service returned a short URL, now shown in the state.
    Shortened(ShortenResult),
    /// The attempt failed; the message is shown in the state.
    Failed(ShortenError),
    /// A later submission started before this one resolved. State was left to
    /// the newer attempt.
    Superseded,
}

/// Drives submission attempts and the copy confirmation for one session.
///
/// # State
///
/// All mutable state lives in a [`SubmissionState`] published over a
/// [`watch`] channel. Every step of an attempt is a separate update, so a
/// subscriber sees the reset, the in-flight flag and the outcome in order.
///
/// # Attempt Flow
///
/// 1. Reset: clear the previous outcome and confirmation, set `is_submitting`
/// 2. Reject empty input ([`ShortenError::EmptyInput`]) without a request
/// 3. Reject malformed URLs ([`ShortenError::MalformedUrl`]) without a request
/// 4. Send exactly one request with the trimmed URL
/// 5. Store the short URL or the classified error message
/// 6. Clear `is_submitting`, also when the attempt future is dropped early
///
/// # Overlapping Submissions
///
/// Submissions are not locked against each other. Each attempt takes a number
/// from a monotonic sequence and only the latest one may write its outcome;
/// older responses are discarded as [`SubmitOutcome::Superseded`].
pub struct ShorteningController<S: ShorteningService, C: ClipboardService> {
    service: Arc<S>,
    clipboard: Arc<C>,
    state: Arc<watch::Sender<SubmissionState>>,
    confirmation: ConfirmationTimer,
    attempts: AtomicU64,
}

impl<S: ShorteningService, C: ClipboardService> ShorteningController<S, C> {
    /// Creates a controller with an empty session state.
    pub fn new(service: Arc<S>, clipboard: Arc<C>) -> Self {
        let (state, _) = watch::channel(SubmissionState::default());

        Self {
            service,
            clipboard,
            state: Arc::new(state),
            confirmation: ConfirmationTimer::new(),
            attempts: AtomicU64::new(0),
        }
    }

    /// Subscribes to state updates.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Runs one submission attempt for `input`.
    ///
    /// Never fails: every error is recorded in `error_message` and also
    /// returned as [`SubmitOutcome::Failed`].
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let attempt = self.begin_attempt(input);
        let mut in_flight = InFlight {
            state: self.state.as_ref(),
            attempts: &self.attempts,
            attempt,
            concluded: false,
        };

        let long_url = input.trim();
        let result = if long_url.is_empty() {
            Err(ShortenError::EmptyInput)
        } else if !is_valid_url(long_url) {
            Err(ShortenError::MalformedUrl)
        } else {
            self.service.shorten(long_url).await
        };

        let outcome = self.conclude(attempt, result);
        in_flight.concluded = true;
        outcome
    }

    /// Copies the current short URL to the clipboard.
    ///
    /// On success shows the confirmation and (re)arms its reset timer. Returns
    /// `false` without touching the clipboard when there is nothing to copy,
    /// and `false` when the clipboard write fails; that failure is logged only.
    pub async fn copy_short_url(&self) -> bool {
        let short_url = self.state.borrow().short_url.clone();
        if short_url.is_empty() {
            debug!("Copy requested with no short URL");
            return false;
        }

        if let Err(e) = self.clipboard.write_text(&short_url).await {
            warn!(error = %e, "Failed to copy short URL");
            return false;
        }

        self.state.send_if_modified(|state| {
            // A newer submission may have replaced the URL while the write ran.
            if state.short_url != short_url {
                return false;
            }
            self.arm_confirmation_reset();
            state.confirm_copy();
            true
        })
    }

    /// Returns true while the confirmation reset is scheduled.
    pub fn is_confirmation_pending(&self) -> bool {
        self.confirmation.is_pending()
    }

    /// Named reset transition. Returns the attempt number.
    fn begin_attempt(&self, input: &str) -> u64 {
        let mut attempt = 0;

        self.state.send_modify(|state| {
            attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
            self.confirmation.cancel();
            state.begin_attempt(input);
        });

        info!(attempt, "Shortening attempt started");
        attempt
    }

    fn conclude(&self, attempt: u64, result: Result<ShortenResult, ShortenError>) -> SubmitOutcome {
        let mut superseded = false;

        self.state.send_if_modified(|state| {
            if self.attempts.load(Ordering::SeqCst) != attempt {
                superseded = true;
                return false;
            }
            match &result {
                Ok(shortened) => state.succeed(shortened),
                Err(e) => state.fail(e),
            }
            true
        });

        if superseded {
            debug!(attempt, "Discarding superseded shortening result");
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(shortened) => {
                info!(attempt, short_url = %shortened.short_url, "Shortening attempt succeeded");
                SubmitOutcome::Shortened(shortened)
            }
            Err(e) => {
                if e.is_local() {
                    debug!(attempt, error = %e, "Input rejected before submission");
                } else {
                    info!(attempt, error = %e, "Shortening attempt failed");
                }
                SubmitOutcome::Failed(e)
            }
        }
    }

    fn arm_confirmation_reset(&self) {
        let state = Arc::clone(&self.state);

        self.confirmation
            .arm(CONFIRMATION_RESET_DELAY, move |ticket| {
                state.send_if_modified(|state| {
                    if !ticket.is_current() || !state.is_confirming_copy() {
                        return false;
                    }
                    state.clear_confirmation();
                    true
                });
            });
    }
}

/// Clears `is_submitting` if an attempt is dropped before it concludes.
struct InFlight<'a> {
    state: &'a watch::Sender<SubmissionState>,
    attempts: &'a AtomicU64,
    attempt: u64,
    concluded: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.concluded {
            return;
        }

        self.state.send_if_modified(|state| {
            if self.attempts.load(Ordering::SeqCst) != self.attempt || !state.is_submitting {
                return false;
            }
            state.is_submitting = false;
            true
        });
        warn!(attempt = self.attempt, "Shortening attempt abandoned before completion");
    }
}
