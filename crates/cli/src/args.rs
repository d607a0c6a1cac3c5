//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

use sorter_core::Config;

/// Move finished Transmission downloads into matching media folders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output root holding one folder per show (default: .)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Transmission daemon address as host:port (default: 127.0.0.1:9091)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Comma-separated file extensions to move (default: mp4,mkv,avi,srt,mp3,ogg)
    #[arg(short, long)]
    pub extension: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// RPC username
    #[arg(long)]
    pub username: Option<String>,

    /// RPC password
    #[arg(long)]
    pub password: Option<String>,
}

impl Args {
    /// Overlay the flags that were given on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(out) = &self.out {
            config.output.root = out.clone();
        }
        if let Some(url) = &self.url {
            config.transmission.url = url.clone();
        }
        if let Some(extension) = &self.extension {
            config.output.extensions = split_extensions(extension);
        }
        if let Some(username) = &self.username {
            config.transmission.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            config.transmission.password = Some(password.clone());
        }
    }
}

fn split_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}
