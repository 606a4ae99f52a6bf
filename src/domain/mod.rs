//! Domain layer: session state and the contract of the remote service.
//!
//! # Architecture
//!
//! - [`entities`] - Session state rendered by the front end
//! - [`shortening_service`] - Trait implemented by the HTTP client
//!
//! The domain layer has no dependencies on infrastructure or presentation;
//! [`crate::infrastructure`] implements its traits.

pub mod entities;
pub mod shortening_service;

pub use shortening_service::ShorteningService;
