//! `reqwest`-backed implementation of [`ShorteningService`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::api::SHORTEN_PATH;
use crate::api::dto::shorten::{ServiceError, ShortenRequest, ShortenResult};
use crate::domain::ShorteningService;
use crate::error::ShortenError;

/// HTTP client for `POST {base_url}/api/shorten`.
///
/// # Response Classification
///
/// | Outcome                               | Result                                 |
/// |---------------------------------------|----------------------------------------|
/// | 2xx with a `ShortenResult` body       | `Ok(ShortenResult)`                    |
/// | 2xx with an unreadable body           | [`ShortenError::ConnectivityFailure`]  |
/// | non-2xx                               | [`ShortenError::ServiceRejected`]      |
/// | connect / DNS / timeout failure       | [`ShortenError::ConnectivityFailure`]  |
///
/// For non-2xx responses the body's `message` is used when present; an absent,
/// empty or unparseable body falls back to the generic message.
#[derive(Debug, Clone)]
pub struct HttpShorteningService {
    http: Client,
    endpoint: String,
}

impl HttpShorteningService {
    /// Creates a client for the service at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Creates a service around an existing client.
    pub fn with_client(http: Client, base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), SHORTEN_PATH);
        Self { http, endpoint }
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ShorteningService for HttpShorteningService {
    async fn shorten(&self, long_url: &str) -> Result<ShortenResult, ShortenError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ShortenRequest {
                long_url: long_url.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Shortening request failed");
                ShortenError::ConnectivityFailure
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = match response.json::<ServiceError>().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(status = status.as_u16(), error = %e, "Unreadable error body");
                    ServiceError::default()
                }
            };

            warn!(
                status = status.as_u16(),
                message = ?body.message,
                details = ?body.details,
                "Shortening service rejected the request"
            );

            return Err(ShortenError::rejected(status.as_u16(), body.message));
        }

        let result = response.json::<ShortenResult>().await.map_err(|e| {
            warn!(status = status.as_u16(), error = %e, "Malformed shortening response");
            ShortenError::ConnectivityFailure
        })?;

        debug!(short_url = %result.short_url, "URL shortened");

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let service = HttpShorteningService::with_client(Client::new(), "http://localhost:3000");
        assert_eq!(service.endpoint(), "http://localhost:3000/api/shorten");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let service =
            HttpShorteningService::with_client(Client::new(), "https://s.example.com/");
        assert_eq!(service.endpoint(), "https://s.example.com/api/shorten");
    }
}
