//! Host clipboard backed by `arboard`.

use super::service::ClipboardService;
use crate::error::{ClipboardError, ClipboardResult};
use arboard::Clipboard;
use async_trait::async_trait;
use tracing::debug;

/// The desktop clipboard.
///
/// `arboard` is synchronous, so each write runs on the blocking pool and the
/// controller keeps processing events meanwhile. A fresh handle is opened per
/// write; headless sessions (no display server) fail with
/// [`ClipboardError::ClipboardDenied`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardService for SystemClipboard {
    async fn write_text(&self, text: &str) -> ClipboardResult<()> {
        let text = text.to_string();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = Clipboard::new().map_err(|e| {
                ClipboardError::ClipboardDenied(format!("Failed to access clipboard: {e}"))
            })?;

            clipboard.set_text(text).map_err(|e| {
                ClipboardError::ClipboardDenied(format!("Failed to copy to clipboard: {e}"))
            })
        })
        .await
        .map_err(|e| ClipboardError::ClipboardDenied(format!("Clipboard task failed: {e}")))??;

        debug!("Text written to system clipboard");
        Ok(())
    }
}
