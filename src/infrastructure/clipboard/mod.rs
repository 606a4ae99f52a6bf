//! Clipboard access for the copy action.
//!
//! Provides a [`ClipboardService`] trait with two implementations:
//! - [`SystemClipboard`] - Desktop clipboard via `arboard`
//! - [`MemoryClipboard`] - In-process buffer for testing/headless use

mod memory_clipboard;
mod service;
mod system_clipboard;

pub use memory_clipboard::MemoryClipboard;
pub use service::ClipboardService;
pub use system_clipboard::SystemClipboard;

#[cfg(test)]
pub use service::MockClipboardService;
