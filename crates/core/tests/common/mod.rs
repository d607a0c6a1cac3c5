//! Common test utilities: an in-process fake Transmission daemon.
//!
//! The fake speaks enough of the RPC protocol for the client under test:
//! the 409 session id handshake, optional basic auth, `torrent-get` and
//! `torrent-remove`. Every accepted request body is recorded.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use sorter_core::TransmissionConfig;

pub const SESSION_HEADER: &str = "X-Transmission-Session-Id";
pub const SESSION_ID: &str = "fake-session-0001";

#[derive(Default)]
struct FakeState {
    torrents: Mutex<Vec<Value>>,
    requests: Mutex<Vec<Value>>,
    conflicts: AtomicUsize,
    expected_auth: Option<String>,
    forced_result: Mutex<Option<String>>,
}

/// Handle to a running fake daemon.
pub struct FakeTransmission {
    pub addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeTransmission {
    /// Start a fake daemon serving the given `torrent-get` entries.
    pub async fn start(torrents: Vec<Value>) -> Self {
        Self::spawn(FakeState {
            torrents: Mutex::new(torrents),
            ..Default::default()
        })
        .await
    }

    /// Start a fake daemon that requires this exact `Authorization` header.
    pub async fn start_with_auth(torrents: Vec<Value>, authorization: &str) -> Self {
        Self::spawn(FakeState {
            torrents: Mutex::new(torrents),
            expected_auth: Some(authorization.to_string()),
            ..Default::default()
        })
        .await
    }

    async fn spawn(state: FakeState) -> Self {
        let state = Arc::new(state);
        let app = Router::new()
            .route("/transmission/rpc", post(rpc))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake daemon");
        let addr = listener.local_addr().expect("No local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake daemon failed");
        });

        Self { addr, state }
    }

    /// Client configuration pointing at this daemon.
    pub fn config(&self) -> TransmissionConfig {
        TransmissionConfig {
            url: self.addr.to_string(),
            ..Default::default()
        }
    }

    /// Request bodies that made it past the handshake.
    pub fn requests(&self) -> Vec<Value> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Number of 409 responses handed out.
    pub fn conflicts(&self) -> usize {
        self.state.conflicts.load(Ordering::SeqCst)
    }

    /// Ids of the torrents still known to the daemon.
    pub fn torrent_ids(&self) -> Vec<i64> {
        self.state
            .torrents
            .lock()
            .unwrap()
            .iter()
            .filter_map(|t| t["id"].as_i64())
            .collect()
    }

    /// Answer every following request with this `result` string.
    pub fn force_result(&self, result: &str) {
        *self.state.forced_result.lock().unwrap() = Some(result.to_string());
    }
}

/// A `torrent-get` entry.
pub fn torrent_json(id: i64, name: &str, status: i64, download_dir: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "downloadDir": download_dir,
    })
}

async fn rpc(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(expected) = &state.expected_auth {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if auth != Some(expected.as_str()) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }

    let session = headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok());
    if session != Some(SESSION_ID) {
        state.conflicts.fetch_add(1, Ordering::SeqCst);
        return (StatusCode::CONFLICT, [(SESSION_HEADER, SESSION_ID)]).into_response();
    }

    state.requests.lock().unwrap().push(body.clone());

    if let Some(result) = state.forced_result.lock().unwrap().clone() {
        return Json(json!({ "result": result })).into_response();
    }

    let response = match body["method"].as_str() {
        Some("torrent-get") => {
            let torrents = state.torrents.lock().unwrap().clone();
            json!({ "result": "success", "arguments": { "torrents": torrents } })
        }
        Some("torrent-remove") => {
            let ids: Vec<i64> = body["arguments"]["ids"]
                .as_array()
                .map(|ids| ids.iter().filter_map(Value::as_i64).collect())
                .unwrap_or_default();
            state
                .torrents
                .lock()
                .unwrap()
                .retain(|t| !t["id"].as_i64().is_some_and(|id| ids.contains(&id)));
            json!({ "result": "success", "arguments": {} })
        }
        _ => json!({ "result": "method name not recognized" }),
    };

    Json(response).into_response()
}
