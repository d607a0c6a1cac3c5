//! Mover module for relocating downloaded files into their output folder.
//!
//! A torrent's data is either a single file or a directory of files. Only
//! the immediate entries of a directory are considered, and only those whose
//! extension is in the [`ExtensionAllowList`] are moved; the rest are skipped
//! and left where they are.
//!
//! Moves are plain renames. Source and output root are expected to live on
//! the same filesystem; a cross-device rename fails with the underlying I/O
//! error and is not retried as a copy.
//!
//! # Example
//!
//! ```ignore
//! use sorter_core::mover::{ExtensionAllowList, FsMover};
//!
//! let mover = FsMover::new("/media/tv", ExtensionAllowList::parse("mkv,srt"));
//! let report = mover
//!     .move_transfer(Path::new("/downloads/Show Name S01"), "Show.Name.S01")
//!     .await?;
//! println!("Moved {} files, skipped {}", report.moved.len(), report.skipped.len());
//! ```

mod error;
mod extensions;
mod fs_mover;

pub use error::MoverError;
pub use extensions::{file_extension, ExtensionAllowList};
pub use fs_mover::{FileOutcome, FsMover, MoveReport};
