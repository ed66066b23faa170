//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:5000");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.cors.allows_any());
        assert!(!config.debug);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
debug = true

[listener]
bind_address = "0.0.0.0:8080"

[limits]
max_body_bytes = 1024

[cors]
allowed_origins = ["https://app.example.com"]
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.limits.max_body_bytes, 1024);
        assert_eq!(config.cors.allowed_origins, vec!["https://app.example.com"]);
        assert_eq!(config.effective_log_level(), "debug");
        // Untouched sections keep their defaults
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[listener\nbind_address = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_origin_list_in_file() {
        let err = parse_config("[cors]\nallowed_origins = []\n").unwrap_err();
        assert!(err.to_string().contains("cors.allowed_origins must not be empty"));
    }

    #[test]
    fn test_validation_error_lists_everything() {
        let err = parse_config("[timeouts]\nrequest_secs = 0\n[limits]\nmax_body_bytes = 0\n")
            .unwrap_err();
        match &err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        let message = err.to_string();
        assert!(message.contains("timeouts.request_secs"));
        assert!(message.contains("limits.max_body_bytes"));
    }
}
