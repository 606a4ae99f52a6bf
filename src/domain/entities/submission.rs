//! Submission state owned by the shortening controller.

use crate::api::dto::shorten::ShortenResult;
use crate::error::ShortenError;

/// Text shown after a successful copy.
pub const COPY_CONFIRMATION: &str = "Copied!";

/// Everything the presentation layer renders for one shortening session.
///
/// `short_url` and `error_message` are never both non-empty: every transition
/// that sets one clears the other. `is_submitting` is only true between
/// [`SubmissionState::begin_attempt`] and the matching
/// [`SubmissionState::succeed`] or [`SubmissionState::fail`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub long_url: String,
    pub short_url: String,
    pub error_message: String,
    pub is_submitting: bool,
    pub copy_confirmation: String,
}

impl SubmissionState {
    /// Clears the previous outcome and marks a new attempt in flight.
    pub fn begin_attempt(&mut self, long_url: &str) {
        self.long_url = long_url.to_string();
        self.short_url.clear();
        self.error_message.clear();
        self.copy_confirmation.clear();
        self.is_submitting = true;
    }

    /// Concludes the attempt with a short URL.
    pub fn succeed(&mut self, result: &ShortenResult) {
        self.short_url = result.short_url.clone();
        self.error_message.clear();
        self.is_submitting = false;
    }

    /// Concludes the attempt with a user-facing error.
    pub fn fail(&mut self, error: &ShortenError) {
        self.short_url.clear();
        self.error_message = error.user_message();
        self.is_submitting = false;
    }

    /// Shows the copy confirmation.
    pub fn confirm_copy(&mut self) {
        self.copy_confirmation = COPY_CONFIRMATION.to_string();
    }

    /// Hides the copy confirmation.
    pub fn clear_confirmation(&mut self) {
        self.copy_confirmation.clear();
    }

    /// Returns true if a short URL is ready to copy.
    pub fn has_short_url(&self) -> bool {
        !self.short_url.is_empty()
    }

    /// Returns true if an error banner should be shown.
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Returns true if the copy confirmation is visible.
    pub fn is_confirming_copy(&self) -> bool {
        !self.copy_confirmation.is_empty()
    }
}
