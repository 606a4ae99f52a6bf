//! Clipboard service trait.

use crate::error::ClipboardResult;
use async_trait::async_trait;

/// Write access to a text clipboard.
///
/// Failures are non-fatal: the controller logs them and leaves the copy
/// confirmation untouched.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::SystemClipboard`] - Host clipboard via `arboard`
/// - [`crate::infrastructure::clipboard::MemoryClipboard`] - In-process buffer for tests and embedding
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardService: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClipboardError::ClipboardDenied`] if the
    /// clipboard cannot be opened or written.
    async fn write_text(&self, text: &str) -> ClipboardResult<()>;
}
