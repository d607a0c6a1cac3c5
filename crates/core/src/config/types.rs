use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub transmission: TransmissionConfig,
}

/// Output folder configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory whose subdirectories are the match candidates
    #[serde(default = "default_output_root")]
    pub root: PathBuf,
    /// File extensions (no leading dot) that are moved; everything else is skipped
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
            extensions: default_extensions(),
        }
    }
}

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

/// Default allow-list, in the same order it is documented on the command line.
pub const DEFAULT_EXTENSIONS: &str = "mp4,mkv,avi,srt,mp3,ogg";

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.split(',').map(str::to_string).collect()
}

/// Transmission RPC configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransmissionConfig {
    /// Daemon address as `host:port` (a full `http://` URL is accepted too)
    #[serde(default = "default_url")]
    pub url: String,
    /// Username for RPC basic auth (optional)
    #[serde(default, deserialize_with = "string_or_number")]
    pub username: Option<String>,
    /// Password for RPC basic auth (optional)
    #[serde(default, deserialize_with = "string_or_number")]
    pub password: Option<String>,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for TransmissionConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            username: None,
            password: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl TransmissionConfig {
    /// Full RPC endpoint URL.
    pub fn rpc_endpoint(&self) -> String {
        let base = self.url.trim_end_matches('/');
        if base.starts_with("http://") || base.starts_with("https://") {
            if base.ends_with("/transmission/rpc") {
                base.to_string()
            } else {
                format!("{}/transmission/rpc", base)
            }
        } else {
            format!("http://{}/transmission/rpc", base)
        }
    }
}

/// Credentials given through the environment arrive as numbers when they
/// are all digits; keep them as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}

fn default_url() -> String {
    "127.0.0.1:9091".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Sanitized config for logging (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub output: OutputConfig,
    pub transmission: SanitizedTransmissionConfig,
}

/// Sanitized Transmission config (password hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedTransmissionConfig {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            output: config.output.clone(),
            transmission: SanitizedTransmissionConfig {
                url: config.transmission.url.clone(),
                username: config.transmission.username.clone(),
                password_configured: config
                    .transmission
                    .password
                    .as_ref()
                    .is_some_and(|p| !p.is_empty()),
                timeout_secs: config.transmission.timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.output.root, PathBuf::from("."));
        assert_eq!(
            config.output.extensions,
            vec!["mp4", "mkv", "avi", "srt", "mp3", "ogg"]
        );
        assert_eq!(config.transmission.url, "127.0.0.1:9091");
        assert_eq!(config.transmission.timeout_secs, 30);
        assert!(config.transmission.username.is_none());
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[output]
root = "/media/tv"
extensions = ["mkv", "srt"]

[transmission]
url = "nas.local:9091"
username = "admin"
password = "hunter2"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.root, PathBuf::from("/media/tv"));
        assert_eq!(config.output.extensions, vec!["mkv", "srt"]);
        assert_eq!(config.transmission.url, "nas.local:9091");
        assert_eq!(config.transmission.username.as_deref(), Some("admin"));
        assert_eq!(config.transmission.timeout_secs, 5);
    }

    #[test]
    fn test_numeric_credentials_are_kept_as_text() {
        let toml = r#"
[transmission]
username = 1000
password = 123456
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.transmission.username.as_deref(), Some("1000"));
        assert_eq!(config.transmission.password.as_deref(), Some("123456"));
    }

    #[test]
    fn test_rpc_endpoint_from_host_port() {
        let config = TransmissionConfig::default();
        assert_eq!(config.rpc_endpoint(), "http://127.0.0.1:9091/transmission/rpc");
    }

    #[test]
    fn test_rpc_endpoint_with_scheme() {
        let config = TransmissionConfig {
            url: "https://seedbox.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.rpc_endpoint(),
            "https://seedbox.example.com/transmission/rpc"
        );

        let full = TransmissionConfig {
            url: "http://10.0.0.2:9091/transmission/rpc".to_string(),
            ..Default::default()
        };
        assert_eq!(full.rpc_endpoint(), "http://10.0.0.2:9091/transmission/rpc");
    }

    #[test]
    fn test_sanitized_config_hides_password() {
        let config = Config {
            output: OutputConfig::default(),
            transmission: TransmissionConfig {
                username: Some("admin".to_string()),
                password: Some("secret".to_string()),
                ..Default::default()
            },
        };
        let sanitized = SanitizedConfig::from(&config);
        assert!(sanitized.transmission.password_configured);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("admin"));
    }
}
