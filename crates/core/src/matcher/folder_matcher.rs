//! Filesystem-backed folder matcher.

use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

use super::error::MatchError;
use super::scoring::{score_folder, select_best_match, FolderMatch};

/// Matches torrent names against the subdirectories of an output root.
///
/// Candidates are listed again on every call; nothing is cached between
/// calls since the output root can change underneath a run.
#[derive(Debug, Clone)]
pub struct FolderMatcher {
    output_root: PathBuf,
}

impl FolderMatcher {
    /// Creates a matcher for the given output root.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Lists the names of the immediate subdirectories of the output root.
    async fn candidate_folders(&self) -> Result<Vec<String>, MatchError> {
        let read_error = |source: std::io::Error| MatchError::ReadOutputRoot {
            path: self.output_root.clone(),
            source,
        };

        let mut entries = fs::read_dir(&self.output_root).await.map_err(read_error)?;
        let mut folders = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
            let file_type = entry.file_type().await.map_err(read_error)?;
            if !file_type.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => folders.push(name),
                Err(name) => warn!("Ignoring non UTF-8 folder name {:?}", name),
            }
        }

        Ok(folders)
    }

    /// Finds the folder a torrent belongs to.
    ///
    /// Returns [`MatchError::NoMatchFound`] when no folder qualifies, and
    /// [`MatchError::ReadOutputRoot`] when the output root cannot be listed.
    pub async fn find_match(&self, torrent_name: &str) -> Result<String, MatchError> {
        let torrent_lower = torrent_name.to_lowercase();

        let matches: Vec<FolderMatch> = self
            .candidate_folders()
            .await?
            .into_iter()
            .filter_map(|folder| {
                let score = score_folder(&folder, &torrent_lower)?;
                debug!(folder = %folder, score, "Folder qualifies");
                Some(FolderMatch { folder, score })
            })
            .collect();

        let best = select_best_match(matches).ok_or_else(|| MatchError::NoMatchFound {
            torrent: torrent_name.to_string(),
        })?;

        info!("Found match {}", best.folder);

        Ok(best.folder)
    }
}
