//! Contract of the remote shortening service.

use crate::api::dto::shorten::ShortenResult;
use crate::error::ShortenError;
use async_trait::async_trait;

/// Maps a long URL to a short one.
///
/// Implementations classify every failure into a [`ShortenError`]; they never
/// return [`ShortenError::EmptyInput`] or [`ShortenError::MalformedUrl`], which
/// the controller detects before calling.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShorteningService`] - `reqwest` client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShorteningService: Send + Sync {
    /// Sends exactly one shortening request for `long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::ServiceRejected`] for non-success statuses and
    /// [`ShortenError::ConnectivityFailure`] for transport failures or an
    /// unreadable success body.
    async fn shorten(&self, long_url: &str) -> Result<ShortenResult, ShortenError>;
}
