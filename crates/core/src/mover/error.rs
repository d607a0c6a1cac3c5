//! Error types for the mover module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while moving a torrent's files.
#[derive(Debug, Error)]
pub enum MoverError {
    /// The torrent data path could not be inspected.
    #[error("Failed to stat {path}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The torrent data directory could not be listed.
    #[error("Failed to read directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move/rename file.
    #[error("Failed to move file from {source} to {destination}")]
    MoveFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl MoverError {
    /// Creates a move failed error.
    pub fn move_failed(source: PathBuf, destination: PathBuf, error: std::io::Error) -> Self {
        Self::MoveFailed {
            source,
            destination,
            error,
        }
    }

    /// Whether this error points at an inconsistent download location and
    /// should abort the whole run rather than just the current torrent.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Stat { .. } | Self::ReadDir { .. })
    }
}
