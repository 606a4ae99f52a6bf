//! Application layer: the interaction controller and its timer.
//!
//! - [`controller`] - Submission lifecycle and copy confirmation
//! - [`confirmation_timer`] - Single-slot cancellable scheduled task

pub mod confirmation_timer;
pub mod controller;

pub use controller::{CONFIRMATION_RESET_DELAY, ShorteningController, SubmitOutcome};
