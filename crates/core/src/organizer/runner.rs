//! Organizer implementation.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::OutputConfig;
use crate::matcher::FolderMatcher;
use crate::mover::{ExtensionAllowList, FsMover};
use crate::torrent_client::{TorrentClient, TorrentInfo};

use super::types::{OrganizerError, RunSummary, TransferOutcome};

/// Moves finished torrents into their output folders and removes them.
pub struct Organizer {
    torrent_client: Arc<dyn TorrentClient>,
    matcher: FolderMatcher,
    mover: FsMover,
}

impl Organizer {
    /// Create a new organizer.
    pub fn new(
        torrent_client: Arc<dyn TorrentClient>,
        matcher: FolderMatcher,
        mover: FsMover,
    ) -> Self {
        Self {
            torrent_client,
            matcher,
            mover,
        }
    }

    /// Create an organizer whose matcher and mover share the configured output root.
    pub fn from_config(torrent_client: Arc<dyn TorrentClient>, output: &OutputConfig) -> Self {
        let extensions: ExtensionAllowList = output.extensions.iter().collect();
        Self::new(
            torrent_client,
            FolderMatcher::new(&output.root),
            FsMover::new(&output.root, extensions),
        )
    }

    /// Run one pass over all torrents known to the daemon.
    ///
    /// Per-torrent problems (no match, a failed move, a failed removal) are
    /// logged and counted. Listing failures and unreadable directories abort
    /// the pass.
    pub async fn run(&self) -> Result<RunSummary, OrganizerError> {
        info!(
            "Filtering with {} on {}",
            self.mover.extensions(),
            self.torrent_client.name()
        );

        let torrents = self.torrent_client.list_torrents().await?;
        info!("{} torrents found", torrents.len());

        let mut summary = RunSummary {
            listed: torrents.len(),
            ..Default::default()
        };

        for torrent in &torrents {
            if !torrent.state.is_eligible() {
                debug!(
                    "Skipping torrent {} ({})",
                    torrent.name,
                    torrent.state.as_str()
                );
                continue;
            }
            summary.eligible += 1;
            let outcome = self.process_torrent(torrent).await?;
            summary.record(&outcome);
        }

        info!(
            eligible = summary.eligible,
            organized = summary.organized,
            unmatched = summary.unmatched,
            move_failures = summary.move_failures,
            remove_failures = summary.remove_failures,
            "Run complete"
        );

        Ok(summary)
    }

    /// Match, move and remove a single torrent.
    ///
    /// Eligibility is the caller's concern; this always attempts the torrent.
    pub async fn process_torrent(
        &self,
        torrent: &TorrentInfo,
    ) -> Result<TransferOutcome, OrganizerError> {
        info!("Torrent : {}", torrent.name);

        let folder = match self.matcher.find_match(&torrent.name).await {
            Ok(folder) => folder,
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                warn!("{}", e);
                return Ok(TransferOutcome::Unmatched);
            }
        };

        let report = match self.mover.move_transfer(&torrent.data_path(), &folder).await {
            Ok(report) => report,
            Err(e) if e.is_fatal() => {
                return Err(OrganizerError::Move {
                    torrent: torrent.name.clone(),
                    source: e,
                })
            }
            Err(e) => {
                error!("Error moving file from torrent {}: {}", torrent.name, e);
                return Ok(TransferOutcome::MoveFailed { folder });
            }
        };

        match self.torrent_client.remove_torrent(torrent.id, true).await {
            Ok(()) => {
                info!("Removed torrent {} (id {})", torrent.name, torrent.id);
                Ok(TransferOutcome::Organized { folder, report })
            }
            Err(e) => {
                warn!("Failed to remove torrent {}: {}", torrent.name, e);
                Ok(TransferOutcome::RemoveFailed { folder, report })
            }
        }
    }
}
