//! Configuration loading from disk and environment.
//!
//! File config is optional; every field has a default. The upstream API
//! key only ever comes from the environment so it never ends up committed
//! inside a config file.

use std::fs;
use std::path::Path;

use crate::config::schema::{AppConfig, API_KEY_ENV};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration, reading the API key from the environment.
///
/// `path` is an optional TOML file; defaults apply when it is absent.
/// Returns an error (rather than starting with partial config) if the file
/// is unreadable, unparseable, or the result fails validation.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_api_key(path, std::env::var(API_KEY_ENV).ok())
}

/// Load configuration with an explicitly supplied API key.
///
/// Split out from [`load_config`] so the environment lookup stays at the
/// edge and tests can exercise the missing-key path deterministically.
pub fn load_with_api_key(
    path: Option<&Path>,
    api_key: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            toml::from_str::<AppConfig>(&content)?
        }
        None => AppConfig::default(),
    };

    config.upstream.api_key = api_key.unwrap_or_default();

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ValidationError;

    #[test]
    fn missing_api_key_is_fatal() {
        let err = load_with_api_key(None, None).unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert!(errors.contains(&ValidationError::MissingApiKey))
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn defaults_plus_key_load_cleanly() {
        let config = load_with_api_key(None, Some("abc123".into())).unwrap();
        assert_eq!(config.upstream.api_key, "abc123");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn file_overrides_are_applied() {
        let dir = std::env::temp_dir();
        let path = dir.join("avatar-proxy-loader-test.toml");
        fs::write(
            &path,
            r#"
            [listener]
            bind_address = "127.0.0.1:18080"

            [upstream]
            endpoint = "http://127.0.0.1:9999/summaries"
            timeout_secs = 1
            "#,
        )
        .unwrap();

        let config = load_with_api_key(Some(&path), Some("abc123".into())).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:18080");
        assert_eq!(config.upstream.endpoint, "http://127.0.0.1:9999/summaries");
        assert_eq!(config.upstream.timeout_secs, 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let err = load_with_api_key(
            Some(Path::new("/nonexistent/avatar-proxy.toml")),
            Some("abc123".into()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
