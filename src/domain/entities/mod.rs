//! Core domain entities.
//!
//! - [`SubmissionState`] - Everything the front end renders for a session
//!
//! Wire payloads ([`crate::api::dto::shorten::ShortenResult`] and friends) live in
//! the API layer; the state copies what it needs out of them.

pub mod submission;

pub use submission::{COPY_CONFIRMATION, SubmissionState};
