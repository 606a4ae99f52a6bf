//! Infrastructure layer for external integrations.
//!
//! Concrete implementations for the actors the controller talks to.
//!
//! # Modules
//!
//! - [`http`] - Shortening service client over `reqwest`
//! - [`clipboard`] - Clipboard abstractions (system and in-memory implementations)

pub mod clipboard;
pub mod http;
