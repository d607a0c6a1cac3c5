//! Folder matcher: resolves a torrent name to an existing output folder.
//!
//! Every subdirectory of the output root is a candidate. Its lowercased name
//! is split on `.` and space into tokens, and every token has to appear as a
//! substring of the lowercased torrent name. Tokens starting with `(` are
//! annotations (a year, a tag) and are never required. Among the qualifying
//! folders the one with the most matched tokens wins; equal scores go to the
//! lexicographically smallest folder name.
//!
//! # Example
//!
//! ```ignore
//! use sorter_core::matcher::FolderMatcher;
//!
//! // Output root contains `Show.Name.(2019)` and `Other.Show`
//! let matcher = FolderMatcher::new("/media/tv");
//! let folder = matcher.find_match("Show Name S01E01 1080p").await?;
//! assert_eq!(folder, "Show.Name.(2019)");
//! ```

mod error;
mod folder_matcher;
mod scoring;

pub use error::MatchError;
pub use folder_matcher::FolderMatcher;
pub use scoring::{score_folder, select_best_match, tokenize_folder_name, FolderMatch};
