//! Torrent client abstraction.
//!
//! This module provides a `TorrentClient` trait covering the two daemon
//! operations the organizer needs (listing and removing transfers) and a
//! Transmission RPC backend.

mod transmission;
mod types;

pub use transmission::TransmissionClient;
pub use types::*;
