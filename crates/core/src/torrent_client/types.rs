//! Types for torrent client operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during torrent client operations.
#[derive(Debug, Error)]
pub enum TorrentClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Torrent not found: {0}")]
    TorrentNotFound(i64),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// State of a torrent, as reported by the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TorrentState {
    /// Stopped; a finished download that is no longer seeding lands here.
    Stopped,
    /// Waiting for a file integrity check.
    CheckWait,
    /// Checking file integrity.
    Checking,
    /// Queued for download.
    DownloadWait,
    /// Downloading from peers.
    Downloading,
    /// Queued for seeding.
    SeedWait,
    /// Seeding to peers.
    Seeding,
    /// Unknown state.
    Unknown,
}

impl TorrentState {
    /// Map a Transmission numeric status code.
    pub fn from_status_code(code: i64) -> Self {
        match code {
            0 => TorrentState::Stopped,
            1 => TorrentState::CheckWait,
            2 => TorrentState::Checking,
            3 => TorrentState::DownloadWait,
            4 => TorrentState::Downloading,
            5 => TorrentState::SeedWait,
            6 => TorrentState::Seeding,
            _ => TorrentState::Unknown,
        }
    }

    /// Returns the string representation for log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TorrentState::Stopped => "stopped",
            TorrentState::CheckWait => "check_wait",
            TorrentState::Checking => "checking",
            TorrentState::DownloadWait => "download_wait",
            TorrentState::Downloading => "downloading",
            TorrentState::SeedWait => "seed_wait",
            TorrentState::Seeding => "seeding",
            TorrentState::Unknown => "unknown",
        }
    }

    /// Whether a torrent in this state is done and can be organized.
    pub fn is_eligible(&self) -> bool {
        matches!(self, TorrentState::Stopped | TorrentState::Seeding)
    }
}

/// Information about a torrent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorrentInfo {
    /// Daemon-assigned id.
    pub id: i64,
    /// Torrent name (file or top-level directory name on disk).
    pub name: String,
    /// Current state.
    pub state: TorrentState,
    /// Directory the torrent was downloaded into.
    pub download_dir: PathBuf,
}

impl TorrentInfo {
    /// Path of the downloaded data: `download_dir/name`.
    pub fn data_path(&self) -> PathBuf {
        self.download_dir.join(&self.name)
    }
}

/// Trait for torrent client backends.
#[async_trait]
pub trait TorrentClient: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// List all torrents known to the daemon.
    async fn list_torrents(&self) -> Result<Vec<TorrentInfo>, TorrentClientError>;

    /// Remove a torrent.
    /// If `delete_files` is true, also delete downloaded files.
    async fn remove_torrent(&self, id: i64, delete_files: bool) -> Result<(), TorrentClientError>;
}
