//! Transmission RPC torrent client implementation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::TransmissionConfig;

use super::{TorrentClient, TorrentClientError, TorrentInfo, TorrentState};

/// Header carrying the CSRF session token.
const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";

/// Fields requested from `torrent-get`.
const TORRENT_FIELDS: [&str; 4] = ["id", "name", "status", "downloadDir"];

/// Transmission client implementation.
pub struct TransmissionClient {
    client: Client,
    config: TransmissionConfig,
    endpoint: String,
    /// Session id handed out by the daemon (refreshed on 409).
    session_id: Arc<RwLock<Option<String>>>,
}

impl TransmissionClient {
    /// Create a new Transmission client.
    pub fn new(config: TransmissionConfig) -> Result<Self, TorrentClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .map_err(|e| {
                TorrentClientError::Internal(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            endpoint: config.rpc_endpoint(),
            client,
            config,
            session_id: Arc::new(RwLock::new(None)),
        })
    }

    /// The RPC endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a single RPC request, attaching session id and credentials.
    async fn send<A: Serialize + Sync>(
        &self,
        request: &RpcRequest<'_, A>,
    ) -> Result<Response, TorrentClientError> {
        let mut builder = self.client.post(&self.endpoint).json(request);

        if let Some(session_id) = self.session_id.read().await.as_deref() {
            builder = builder.header(SESSION_ID_HEADER, session_id);
        }
        if let Some(username) = &self.config.username {
            builder = builder.basic_auth(username, self.config.password.as_ref());
        }

        builder.send().await.map_err(map_request_error)
    }

    /// Call an RPC method and decode its `arguments`.
    async fn call<A, R>(&self, method: &str, arguments: A) -> Result<R, TorrentClientError>
    where
        A: Serialize + Send + Sync,
        R: DeserializeOwned + Send,
    {
        let request = RpcRequest { method, arguments };

        let mut response = self.send(&request).await?;

        if response.status() == StatusCode::CONFLICT {
            // The daemon rejects requests without a current session id and
            // hands the new one out in the 409 response.
            let session_id = response
                .headers()
                .get(SESSION_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
                .ok_or_else(|| {
                    TorrentClientError::ApiError(
                        "409 response without a session id header".to_string(),
                    )
                })?;
            debug!("Transmission session id refreshed");
            *self.session_id.write().await = Some(session_id);

            response = self.send(&request).await?;
        }

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(TorrentClientError::AuthenticationFailed(
                "Invalid credentials".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(TorrentClientError::ApiError(format!("HTTP {}", status)));
        }

        let body: RpcResponse<R> = response.json().await.map_err(|e| {
            TorrentClientError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        if body.result != "success" {
            return Err(TorrentClientError::ApiError(body.result));
        }

        body.arguments.ok_or_else(|| {
            TorrentClientError::ApiError(format!("{} response has no arguments", method))
        })
    }
}

fn map_request_error(e: reqwest::Error) -> TorrentClientError {
    if e.is_timeout() {
        TorrentClientError::Timeout
    } else if e.is_connect() {
        TorrentClientError::ConnectionFailed(e.to_string())
    } else {
        TorrentClientError::ApiError(e.to_string())
    }
}

/// RPC request envelope.
#[derive(Debug, Serialize)]
struct RpcRequest<'a, A> {
    method: &'a str,
    arguments: A,
}

/// RPC response envelope.
#[derive(Debug, Deserialize)]
struct RpcResponse<R> {
    result: String,
    arguments: Option<R>,
}

#[derive(Debug, Serialize)]
struct TorrentGetArguments {
    fields: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
struct TorrentGetResponse {
    torrents: Vec<TrTorrent>,
}

#[derive(Debug, Serialize)]
struct TorrentRemoveArguments {
    ids: Vec<i64>,
    #[serde(rename = "delete-local-data")]
    delete_local_data: bool,
}

/// Transmission torrent entry from `torrent-get`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrTorrent {
    id: i64,
    name: String,
    status: i64,
    download_dir: String,
}

impl TrTorrent {
    fn into_torrent_info(self) -> TorrentInfo {
        TorrentInfo {
            id: self.id,
            name: self.name,
            state: TorrentState::from_status_code(self.status),
            download_dir: PathBuf::from(self.download_dir),
        }
    }
}

#[async_trait]
impl TorrentClient for TransmissionClient {
    fn name(&self) -> &str {
        "transmission"
    }

    async fn list_torrents(&self) -> Result<Vec<TorrentInfo>, TorrentClientError> {
        let response: TorrentGetResponse = self
            .call(
                "torrent-get",
                TorrentGetArguments {
                    fields: &TORRENT_FIELDS,
                },
            )
            .await?;

        Ok(response
            .torrents
            .into_iter()
            .map(TrTorrent::into_torrent_info)
            .collect())
    }

    async fn remove_torrent(&self, id: i64, delete_files: bool) -> Result<(), TorrentClientError> {
        let _: serde_json::Value = self
            .call(
                "torrent-remove",
                TorrentRemoveArguments {
                    ids: vec![id],
                    delete_local_data: delete_files,
                },
            )
            .await?;
        Ok(())
    }
}
