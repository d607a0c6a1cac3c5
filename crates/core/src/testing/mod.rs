//! Testing utilities and mock implementations.
//!
//! This module provides a mock torrent client so the organizer can be
//! exercised end to end against a real filesystem without a daemon.
//!
//! # Example
//!
//! ```rust,ignore
//! use sorter_core::testing::{fixtures, MockTorrentClient};
//!
//! let client = MockTorrentClient::new();
//! client
//!     .add_mock_torrent(fixtures::torrent(1, "Show S01", TorrentState::Seeding, downloads))
//!     .await;
//!
//! // Run the organizer, then check what was removed
//! assert_eq!(client.removed_torrents().await, vec![(1, true)]);
//! ```

mod mock_torrent_client;

pub use mock_torrent_client::MockTorrentClient;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::Path;

    use crate::torrent_client::{TorrentInfo, TorrentState};

    /// Create a test torrent downloaded into `download_dir`.
    pub fn torrent(id: i64, name: &str, state: TorrentState, download_dir: &Path) -> TorrentInfo {
        TorrentInfo {
            id,
            name: name.to_string(),
            state,
            download_dir: download_dir.to_path_buf(),
        }
    }

    /// Create a seeding test torrent.
    pub fn seeding_torrent(id: i64, name: &str, download_dir: &Path) -> TorrentInfo {
        torrent(id, name, TorrentState::Seeding, download_dir)
    }
}
