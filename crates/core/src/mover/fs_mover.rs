//! File system mover implementation.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::error::MoverError;
use super::extensions::ExtensionAllowList;

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Renamed into the output folder.
    Moved { destination: PathBuf },
    /// Left in place because its extension is not allowed.
    Skipped,
}

/// Files handled while moving one torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Destination paths of moved files.
    pub moved: Vec<PathBuf>,
    /// Source paths of skipped files.
    pub skipped: Vec<PathBuf>,
}

impl MoveReport {
    fn record(&mut self, source: &Path, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Moved { destination } => self.moved.push(destination),
            FileOutcome::Skipped => self.skipped.push(source.to_path_buf()),
        }
    }
}

/// Moves allow-listed files into folders under an output root.
#[derive(Debug, Clone)]
pub struct FsMover {
    output_root: PathBuf,
    extensions: ExtensionAllowList,
}

impl FsMover {
    /// Creates a mover for the given output root and extension allow-list.
    pub fn new(output_root: impl Into<PathBuf>, extensions: ExtensionAllowList) -> Self {
        Self {
            output_root: output_root.into(),
            extensions,
        }
    }

    pub fn extensions(&self) -> &ExtensionAllowList {
        &self.extensions
    }

    /// Moves one file to `output_root/folder/<basename>` if its extension is
    /// allowed; otherwise skips it. Skipping is not an error.
    pub async fn move_file(&self, file: &Path, folder: &str) -> Result<FileOutcome, MoverError> {
        let file_name = match file.file_name() {
            Some(name) if self.extensions.allows(file) => name,
            _ => {
                info!("Skipping {}", file.display());
                return Ok(FileOutcome::Skipped);
            }
        };

        let destination = self.output_root.join(folder).join(file_name);
        info!("Moving {} to {}", file.display(), folder);

        fs::rename(file, &destination).await.map_err(|e| {
            MoverError::move_failed(file.to_path_buf(), destination.clone(), e)
        })?;

        Ok(FileOutcome::Moved { destination })
    }

    /// Moves a torrent's data into `folder`.
    ///
    /// A single file is handled directly. For a directory, its immediate
    /// entries are handled in file name order and the first failure stops
    /// the remaining ones.
    pub async fn move_transfer(
        &self,
        source: &Path,
        folder: &str,
    ) -> Result<MoveReport, MoverError> {
        let metadata = fs::metadata(source).await.map_err(|e| MoverError::Stat {
            path: source.to_path_buf(),
            source: e,
        })?;

        let mut report = MoveReport::default();

        if !metadata.is_dir() {
            let outcome = self.move_file(source, folder).await?;
            report.record(source, outcome);
            return Ok(report);
        }

        for entry in list_entries(source).await? {
            let outcome = self.move_file(&entry, folder).await?;
            report.record(&entry, outcome);
        }

        Ok(report)
    }
}

/// Immediate entries of a directory, sorted by file name.
async fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, MoverError> {
    let read_error = |source: std::io::Error| MoverError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut reader = fs::read_dir(dir).await.map_err(read_error)?;
    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(read_error)? {
        entries.push(entry.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(entries)
}
