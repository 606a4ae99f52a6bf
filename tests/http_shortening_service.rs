mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{StubResponse, spawn_stub, unreachable_base_url};
use serde_json::json;
use shortener_client::prelude::*;

#[tokio::test]
async fn test_shorten_success() {
    let stub = spawn_stub(StubResponse::json(
        StatusCode::OK,
        json!({
            "shortUrl": "https://short.ly/abc123",
            "longUrl": "https://example.com/very/long/path"
        }),
    ))
    .await;

    let result = stub
        .client()
        .shorten("https://example.com/very/long/path")
        .await
        .unwrap();

    assert_eq!(result.short_url, "https://short.ly/abc123");
    assert_eq!(result.long_url, "https://example.com/very/long/path");
}

#[tokio::test]
async fn test_shorten_sends_json_body() {
    let stub = spawn_stub(StubResponse::json(
        StatusCode::OK,
        json!({ "shortUrl": "https://short.ly/x", "longUrl": "https://example.com" }),
    ))
    .await;

    stub.client().shorten("https://example.com").await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(requests[0].json(), json!({ "longUrl": "https://example.com" }));
}

#[tokio::test]
async fn test_shorten_created_status_is_success() {
    let stub = spawn_stub(StubResponse::json(
        StatusCode::CREATED,
        json!({ "shortUrl": "https://short.ly/new", "longUrl": "https://example.com" }),
    ))
    .await;

    let result = stub.client().shorten("https://example.com").await.unwrap();
    assert_eq!(result.short_url, "https://short.ly/new");
}

#[tokio::test]
async fn test_shorten_rate_limited() {
    let stub = spawn_stub(StubResponse::json(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "message": "Rate limit exceeded" }),
    ))
    .await;

    let err = stub.client().shorten("https://example.com").await.unwrap_err();

    assert_eq!(
        err,
        ShortenError::ServiceRejected {
            status: 429,
            message: "Rate limit exceeded".to_string()
        }
    );
}

#[tokio::test]
async fn test_shorten_rejection_with_details() {
    let stub = spawn_stub(StubResponse::json(
        StatusCode::BAD_REQUEST,
        json!({ "message": "Invalid URL", "details": "host is blocked" }),
    ))
    .await;

    let err = stub.client().shorten("https://example.com").await.unwrap_err();

    assert_eq!(err.user_message(), "Invalid URL");
}

#[tokio::test]
async fn test_shorten_rejection_without_message() {
    let stub = spawn_stub(StubResponse::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "details": "stack trace" }),
    ))
    .await;

    let err = stub.client().shorten("https://example.com").await.unwrap_err();

    assert_eq!(err.user_message(), "An unexpected error occurred.");
}

#[tokio::test]
async fn test_shorten_rejection_with_unparseable_body() {
    let stub = spawn_stub(StubResponse::raw(
        StatusCode::BAD_GATEWAY,
        "<html>Bad Gateway</html>",
    ))
    .await;

    let err = stub.client().shorten("https://example.com").await.unwrap_err();

    assert!(matches!(err, ShortenError::ServiceRejected { status: 502, .. }));
    assert_eq!(err.user_message(), "An unexpected error occurred.");
}

#[tokio::test]
async fn test_shorten_malformed_success_body() {
    let stub = spawn_stub(StubResponse::raw(StatusCode::OK, "{\"unexpected\": true}")).await;

    let err = stub.client().shorten("https://example.com").await.unwrap_err();

    assert_eq!(err, ShortenError::ConnectivityFailure);
}

#[tokio::test]
async fn test_shorten_connection_refused() {
    let base_url = unreachable_base_url().await;
    let client = HttpShorteningService::new(&base_url, Duration::from_secs(2)).unwrap();

    let err = client.shorten("https://example.com").await.unwrap_err();

    assert_eq!(err, ShortenError::ConnectivityFailure);
}

#[tokio::test]
async fn test_shorten_timeout() {
    let stub = spawn_stub(
        StubResponse::json(
            StatusCode::OK,
            json!({ "shortUrl": "https://short.ly/late", "longUrl": "https://example.com" }),
        )
        .delayed(Duration::from_secs(3)),
    )
    .await;
    let client = HttpShorteningService::new(&stub.base_url, Duration::from_millis(200)).unwrap();

    let err = client.shorten("https://example.com").await.unwrap_err();

    assert_eq!(err, ShortenError::ConnectivityFailure);
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let stub = spawn_stub(StubResponse::json(
        StatusCode::OK,
        json!({ "shortUrl": "https://short.ly/abc123", "longUrl": "https://example.com" }),
    ))
    .await;
    let client =
        HttpShorteningService::new(&format!("{}/", stub.base_url), Duration::from_secs(5)).unwrap();

    assert!(client.shorten("https://example.com").await.is_ok());
    assert_eq!(stub.requests().len(), 1);
}
