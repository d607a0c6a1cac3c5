//! Error types for the matcher module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while matching a torrent to a folder.
#[derive(Debug, Error)]
pub enum MatchError {
    /// No folder under the output root qualifies for this torrent.
    #[error("no match found for {torrent}")]
    NoMatchFound { torrent: String },

    /// The output root listing could not be read.
    #[error("Failed to read output directory {path}")]
    ReadOutputRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MatchError {
    /// Whether this error should abort the whole run rather than just the
    /// current torrent.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ReadOutputRoot { .. })
    }
}
