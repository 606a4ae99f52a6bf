//! # Shortener Client
//!
//! Client for the url-shortener service: validates a long URL, submits it to
//! `POST /api/shorten`, shows the short URL and copies it to the clipboard with
//! a transient "Copied!" confirmation.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Session state and the shortening service contract
//! - **Application Layer** ([`application`]) - Interaction controller and confirmation timer
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client and clipboard access
//! - **API Layer** ([`api`]) - Wire DTOs of the shortening endpoint
//! - **UI Layer** ([`ui`]) - Display model for front ends
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_API_BASE_URL="http://localhost:3000"  # Optional
//!
//! # Interactive session
//! cargo run
//!
//! # One-shot
//! cargo run -- shorten https://example.com/very/long/path --copy
//! ```
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use shortener_client::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let service = HttpShorteningService::new("http://localhost:3000", Duration::from_secs(10))?;
//! let controller = ShorteningController::new(Arc::new(service), Arc::new(SystemClipboard::new()));
//!
//! if let SubmitOutcome::Shortened(result) = controller.submit("https://example.com").await {
//!     println!("{}", result.short_url);
//!     controller.copy_short_url().await;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod utils;

pub mod config;

pub use error::{ClipboardError, ShortenError};

/// Commonly used types for front ends and integration tests.
pub mod prelude {
    pub use crate::api::dto::shorten::{ServiceError, ShortenRequest, ShortenResult};
    pub use crate::application::{ShorteningController, SubmitOutcome};
    pub use crate::domain::ShorteningService;
    pub use crate::domain::entities::SubmissionState;
    pub use crate::error::{ClipboardError, ShortenError};
    pub use crate::infrastructure::clipboard::{ClipboardService, MemoryClipboard, SystemClipboard};
    pub use crate::infrastructure::http::HttpShorteningService;
    pub use crate::ui::View;
}
