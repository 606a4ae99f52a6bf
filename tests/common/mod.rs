#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Router, routing::post};
use serde_json::Value;
use shortener_client::prelude::*;
use tokio::net::TcpListener;

/// One request received by the stub service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Canned answer of the stub service.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubResponse {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone)]
struct StubState {
    response: StubResponse,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A running stub of `POST /api/shorten`.
pub struct StubService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubService {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> HttpShorteningService {
        HttpShorteningService::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }
}

async fn shorten_stub(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    if let Some(delay) = state.response.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.response.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.response.body,
    )
}

/// Starts a stub service on an ephemeral port that always answers `response`.
pub async fn spawn_stub(response: StubResponse) -> StubService {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        response,
        requests: Arc::clone(&requests),
    };

    let app = Router::new()
        .route("/api/shorten", post(shorten_stub))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubService {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// Base URL of a port with nothing listening.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn create_test_controller(
    service: HttpShorteningService,
) -> (
    ShorteningController<HttpShorteningService, MemoryClipboard>,
    Arc<MemoryClipboard>,
) {
    let clipboard = Arc::new(MemoryClipboard::new());
    let controller = ShorteningController::new(Arc::new(service), Arc::clone(&clipboard));
    (controller, clipboard)
}
