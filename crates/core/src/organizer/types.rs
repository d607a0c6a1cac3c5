//! Types for the organizer.

use serde::Serialize;
use thiserror::Error;

use crate::matcher::MatchError;
use crate::mover::{MoveReport, MoverError};
use crate::torrent_client::TorrentClientError;

/// Errors that abort an organizer run.
#[derive(Debug, Error)]
pub enum OrganizerError {
    /// Torrent client error.
    #[error("torrent client error: {0}")]
    TorrentClient(#[from] TorrentClientError),

    /// The output root could not be scanned.
    #[error("matcher error: {0}")]
    Match(#[from] MatchError),

    /// A torrent's download location could not be read.
    #[error("cannot read data of torrent {torrent}: {source}")]
    Move {
        torrent: String,
        #[source]
        source: MoverError,
    },
}

/// How a single eligible torrent was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Files moved and torrent removed from the daemon.
    Organized { folder: String, report: MoveReport },
    /// No output folder matched the torrent name.
    Unmatched,
    /// A file could not be moved; the torrent was left in the daemon.
    MoveFailed { folder: String },
    /// Files moved, but the daemon refused to remove the torrent.
    RemoveFailed { folder: String, report: MoveReport },
}

/// Counters for one organizer run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Torrents reported by the daemon.
    pub listed: usize,
    /// Torrents in a finished or seeding state.
    pub eligible: usize,
    /// Torrents moved and removed.
    pub organized: usize,
    /// Torrents without a matching folder.
    pub unmatched: usize,
    /// Torrents whose files could not all be moved.
    pub move_failures: usize,
    /// Torrents moved but not removed.
    pub remove_failures: usize,
    /// Files moved across all torrents.
    pub files_moved: usize,
    /// Files skipped across all torrents.
    pub files_skipped: usize,
}

impl RunSummary {
    /// Account for one processed torrent.
    pub fn record(&mut self, outcome: &TransferOutcome) {
        match outcome {
            TransferOutcome::Organized { report, .. } => {
                self.organized += 1;
                self.add_files(report);
            }
            TransferOutcome::Unmatched => self.unmatched += 1,
            TransferOutcome::MoveFailed { .. } => self.move_failures += 1,
            TransferOutcome::RemoveFailed { report, .. } => {
                self.remove_failures += 1;
                self.add_files(report);
            }
        }
    }

    fn add_files(&mut self, report: &MoveReport) {
        self.files_moved += report.moved.len();
        self.files_skipped += report.skipped.len();
    }
}
