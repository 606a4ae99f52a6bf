//! HTTP access to the shortening service.

mod http_shortening_service;

pub use http_shortening_service::HttpShorteningService;
