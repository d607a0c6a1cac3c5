//! Organizer: one pass over the daemon's torrents.
//!
//! For every finished or seeding torrent the organizer finds the output
//! folder it belongs to, moves its media files there and then removes the
//! torrent (and its remaining data) from the daemon:
//! - **Match**: no matching folder skips the torrent
//! - **Move**: a failed file move skips the torrent, leaving it for a later run
//! - **Remove**: only after every file of the torrent was handled
//!
//! Torrents are processed one after the other. An unreadable output root or
//! download location aborts the whole pass.

mod runner;
mod types;

pub use runner::Organizer;
pub use types::{OrganizerError, RunSummary, TransferOutcome};
