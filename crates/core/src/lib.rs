pub mod config;
pub mod matcher;
pub mod mover;
pub mod organizer;
pub mod testing;
pub mod torrent_client;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, OutputConfig,
    SanitizedConfig, TransmissionConfig, DEFAULT_EXTENSIONS,
};
pub use matcher::{FolderMatch, FolderMatcher, MatchError};
pub use mover::{ExtensionAllowList, FileOutcome, FsMover, MoveReport, MoverError};
pub use organizer::{Organizer, OrganizerError, RunSummary, TransferOutcome};
pub use torrent_client::{
    TorrentClient, TorrentClientError, TorrentInfo, TorrentState, TransmissionClient,
};
