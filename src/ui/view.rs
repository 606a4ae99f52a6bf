//! Presentation model derived from [`SubmissionState`].
//!
//! Keeps the display rules out of the terminal code so they can be tested
//! without a TTY.

use crate::domain::entities::SubmissionState;

/// Label of the submit control while idle.
pub const SUBMIT_LABEL: &str = "Shorten URL";

/// Label of the submit control while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Shortening...";

/// Label above the short URL.
pub const RESULT_LABEL: &str = "Your short URL:";

/// What the front end shows for one state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub submit_label: &'static str,
    /// The submit control is disabled while a request is in flight.
    pub submit_enabled: bool,
    pub error_banner: Option<String>,
    pub result: Option<ResultPanel>,
}

/// The copyable short URL and its transient confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub label: &'static str,
    pub short_url: String,
    pub confirmation: Option<String>,
}

impl View {
    pub fn from_state(state: &SubmissionState) -> Self {
        let submit_label = if state.is_submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        };

        let error_banner = state.has_error().then(|| state.error_message.clone());

        let result = state.has_short_url().then(|| ResultPanel {
            label: RESULT_LABEL,
            short_url: state.short_url.clone(),
            confirmation: state
                .is_confirming_copy()
                .then(|| state.copy_confirmation.clone()),
        });

        Self {
            submit_label,
            submit_enabled: !state.is_submitting,
            error_banner,
            result,
        }
    }
}
