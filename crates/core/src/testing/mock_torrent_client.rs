//! Mock torrent client for testing.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::torrent_client::{TorrentClient, TorrentClientError, TorrentInfo};

/// Mock implementation of the TorrentClient trait.
///
/// Provides controllable behavior for testing:
/// - Pre-populate torrents for listing
/// - Track removals for assertions
/// - Simulate failures
///
/// Torrents are listed in id order.
#[derive(Debug, Default)]
pub struct MockTorrentClient {
    /// Current torrents by id.
    torrents: Arc<RwLock<BTreeMap<i64, TorrentInfo>>>,
    /// Recorded remove_torrent calls as `(id, delete_files)`.
    removed: Arc<RwLock<Vec<(i64, bool)>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<TorrentClientError>>>,
}

impl MockTorrentClient {
    /// Create a new mock torrent client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a torrent.
    pub async fn add_mock_torrent(&self, info: TorrentInfo) {
        self.torrents.write().await.insert(info.id, info);
    }

    /// Get all recorded remove_torrent calls.
    pub async fn removed_torrents(&self) -> Vec<(i64, bool)> {
        self.removed.read().await.clone()
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: TorrentClientError) {
        *self.next_error.write().await = Some(error);
    }

    /// Clear any pending error.
    pub async fn clear_next_error(&self) {
        *self.next_error.write().await = None;
    }

    /// Check if a torrent exists.
    pub async fn has_torrent(&self, id: i64) -> bool {
        self.torrents.read().await.contains_key(&id)
    }

    /// Get the number of torrents.
    pub async fn torrent_count(&self) -> usize {
        self.torrents.read().await.len()
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<TorrentClientError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl TorrentClient for MockTorrentClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list_torrents(&self) -> Result<Vec<TorrentInfo>, TorrentClientError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(self.torrents.read().await.values().cloned().collect())
    }

    async fn remove_torrent(&self, id: i64, delete_files: bool) -> Result<(), TorrentClientError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        if self.torrents.write().await.remove(&id).is_some() {
            self.removed.write().await.push((id, delete_files));
            Ok(())
        } else {
            Err(TorrentClientError::TorrentNotFound(id))
        }
    }
}
