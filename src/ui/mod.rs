//! Presentation helpers for front ends.
//!
//! - [`view`] - Display model computed from a state snapshot

pub mod view;

pub use view::{ResultPanel, View};
