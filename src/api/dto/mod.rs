//! Data Transfer Objects exchanged with the shortening service.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod shorten;
