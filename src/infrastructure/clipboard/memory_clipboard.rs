//! In-process clipboard for tests and embedding.

use std::sync::{Mutex, PoisonError};

use super::service::ClipboardService;
use crate::error::{ClipboardError, ClipboardResult};
use async_trait::async_trait;

/// A clipboard that keeps the last written text in memory.
///
/// # Use Cases
///
/// - Integration tests that must not touch the desktop clipboard
/// - Headless front ends that read the value back themselves
/// - Simulating a denied clipboard via [`MemoryClipboard::denied`]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    deny: bool,
}

impl MemoryClipboard {
    /// Creates an empty, writable clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that rejects every write.
    pub fn denied() -> Self {
        Self {
            contents: Mutex::new(None),
            deny: true,
        }
    }

    /// Returns the last written text.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ClipboardService for MemoryClipboard {
    async fn write_text(&self, text: &str) -> ClipboardResult<()> {
        if self.deny {
            return Err(ClipboardError::ClipboardDenied(
                "Clipboard writes are disabled".to_string(),
            ));
        }

        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_read() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());

        clipboard.write_text("https://short.ly/abc123").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("https://short.ly/abc123"));

        clipboard.write_text("https://short.ly/xyz").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("https://short.ly/xyz"));
    }

    #[tokio::test]
    async fn test_denied_rejects_writes() {
        let clipboard = MemoryClipboard::denied();
        let result = clipboard.write_text("https://short.ly/abc123").await;

        assert!(matches!(result, Err(ClipboardError::ClipboardDenied(_))));
        assert!(clipboard.contents().is_none());
    }
}
