//! Error taxonomy for shortening attempts and clipboard writes.
//!
//! Every [`ShortenError`] is recovered by the controller and surfaced as a single
//! human-readable message; none of them escape a submission as a failure.
//! [`ClipboardError`] is logged only.

/// Shown when the trimmed input is empty.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL.";

/// Shown when the input is not an absolute URL.
pub const MALFORMED_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com).";

/// Fallback when the service rejects a request without a usable message.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Shown on any transport-level failure.
pub const CONNECTIVITY_FAILURE_MESSAGE: &str =
    "Failed to connect to the service. Please try again later.";

/// Classified outcome of a failed shortening attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    /// Input was empty or whitespace only. No request is made.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    /// Input is not an absolute URL with a scheme and authority. No request is made.
    #[error("{}", MALFORMED_URL_MESSAGE)]
    MalformedUrl,

    /// Service answered with a non-success status.
    #[error("{message}")]
    ServiceRejected { status: u16, message: String },

    /// Connection, timeout, DNS or an unreadable success body.
    #[error("{}", CONNECTIVITY_FAILURE_MESSAGE)]
    ConnectivityFailure,
}

impl ShortenError {
    /// Builds a rejection, falling back to the generic message when the service
    /// gave none.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string());

        Self::ServiceRejected { status, message }
    }

    /// The message the presentation layer shows for this error.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// True for failures detected before any network call.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::MalformedUrl)
    }
}

/// Errors from the host clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Access refused or the clipboard is not available in this context.
    #[error("Clipboard access denied: {0}")]
    ClipboardDenied(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;
