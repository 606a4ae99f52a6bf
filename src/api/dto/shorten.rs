//! Wire types for the shortening endpoint.
//!
//! Field names follow the service's camelCase JSON.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: String,
}

/// Successful response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResult {
    pub short_url: String,
    pub long_url: String,
}

/// Error payload sent with non-success statuses.
///
/// Both fields are optional on the wire so that a body missing `message` still
/// parses and falls back to the generic message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
