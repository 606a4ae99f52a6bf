//! Contract of the remote shortening API.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies for `POST /api/shorten`

pub mod dto;

/// Path of the shortening endpoint, relative to the configured base URL.
pub const SHORTEN_PATH: &str = "/api/shorten";
