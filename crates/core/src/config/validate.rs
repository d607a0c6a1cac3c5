use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - At least one non-empty extension is allowed
/// - Transmission url is set
/// - Transmission timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config
        .output
        .extensions
        .iter()
        .all(|e| e.trim().trim_start_matches('.').is_empty())
    {
        return Err(ConfigError::ValidationError(
            "output.extensions cannot be empty".to_string(),
        ));
    }

    if config.transmission.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "transmission.url cannot be empty".to_string(),
        ));
    }

    if config.transmission.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "transmission.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, TransmissionConfig};

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_extensions_fails() {
        let config = Config {
            output: OutputConfig {
                extensions: vec![" ".to_string(), ".".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_url_fails() {
        let config = Config {
            transmission: TransmissionConfig {
                url: "  ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let config = Config {
            transmission: TransmissionConfig {
                timeout_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }
}
