//! Common test utilities for qitmeer-wallet-ui integration tests
//!
//! Provides an in-process axum app standing in for the wallet backend. It
//! answers `POST /api` with canned replies, in order, and records what the
//! client sent.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Canned HTTP reply
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
}

impl MockReply {
    /// Successful JSON-RPC reply carrying `result`
    pub fn result(result: Value) -> Self {
        Self {
            status: 200,
            body: serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string(),
        }
    }

    /// JSON-RPC error reply
    pub fn rpc_error(code: i64, message: &str) -> Self {
        Self {
            status: 200,
            body: serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": code, "message": message}
            })
            .to_string(),
        }
    }

    /// Raw HTTP reply
    pub fn http(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// One request as received by the mock backend
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Value,
}

impl CapturedRequest {
    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn json(&self) -> Value {
        self.body.clone()
    }
}

#[derive(Clone, Default)]
struct BackendState {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    delay: Option<Duration>,
}

async fn handle_rpc(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state
        .captured
        .lock()
        .expect("Captured requests poisoned")
        .push(CapturedRequest {
            method,
            path: uri.path().to_string(),
            headers,
            body,
        });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    let reply = state
        .replies
        .lock()
        .expect("Reply queue poisoned")
        .pop_front();

    match reply {
        Some(reply) => (
            StatusCode::from_u16(reply.status).expect("Invalid mock status"),
            [(header::CONTENT_TYPE, "application/json")],
            reply.body,
        )
            .into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "no reply queued").into_response(),
    }
}

/// Wallet backend stand-in
pub struct MockRpcServer {
    addr: SocketAddr,
    state: BackendState,
    handle: JoinHandle<()>,
}

impl MockRpcServer {
    /// Start serving `replies`, one per request, in order
    pub async fn start(replies: Vec<MockReply>) -> Self {
        Self::spawn(BackendState {
            replies: Arc::new(Mutex::new(replies.into())),
            ..Default::default()
        })
        .await
    }

    /// Accept requests but hold every answer for `hold_for`
    pub async fn silent(hold_for: Duration) -> Self {
        Self::spawn(BackendState {
            delay: Some(hold_for),
            ..Default::default()
        })
        .await
    }

    async fn spawn(state: BackendState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener
            .local_addr()
            .expect("Failed to read mock backend address");

        let app = Router::new()
            .route("/api", post(handle_rpc))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock backend stopped");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// RPC base URL the way the wallet server exposes it
    pub fn url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Stop the backend and return the captured requests
    ///
    /// Panics if any queued reply was never asked for.
    pub fn finish(self) -> Vec<CapturedRequest> {
        self.handle.abort();

        let unused = self.state.replies.lock().expect("Reply queue poisoned").len();
        assert_eq!(unused, 0, "{} queued replies were never requested", unused);

        let captured = self.state.captured.lock().expect("Captured requests poisoned");
        captured.clone()
    }
}
