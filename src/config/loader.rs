//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{RuntimeMode, ServerConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable selecting the runtime mode.
pub const ENV_RUNTIME_MODE: &str = "APP_ENV";
/// Environment variable overriding the listener port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable holding the GitHub API token.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply environment
/// overrides and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<ServerConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ServerConfig::default(),
    };

    let config = apply_env_overrides(config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using the given lookup.
///
/// An unrecognised runtime mode falls back to development.
pub fn apply_env_overrides<F>(mut config: ServerConfig, lookup: F) -> ServerConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(mode) = lookup(ENV_RUNTIME_MODE) {
        config.runtime = mode.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to development mode");
            RuntimeMode::Development
        });
    }

    if let Some(port) = lookup(ENV_PORT) {
        match port.parse::<u16>() {
            Ok(port) => {
                let host = config
                    .listener
                    .bind_address
                    .rsplit_once(':')
                    .map(|(host, _)| host.to_string())
                    .unwrap_or_else(|| "0.0.0.0".to_string());
                config.listener.bind_address = format!("{}:{}", host, port);
            }
            Err(_) => tracing::warn!(port = %port, "Ignoring invalid PORT override"),
        }
    }

    if let Some(token) = lookup(ENV_GITHUB_TOKEN).filter(|t| !t.is_empty()) {
        config.stars.token = Some(token);
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let config = apply_env_overrides(
            ServerConfig::default(),
            env(&[("APP_ENV", "production"), ("PORT", "9000"), ("GITHUB_TOKEN", "abc")]),
        );

        assert_eq!(config.runtime, RuntimeMode::Production);
        assert_eq!(config.listener.bind_address, "0.0.0.0:9000");
        assert_eq!(config.stars.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_unknown_mode_is_development() {
        let mut base = ServerConfig::default();
        base.runtime = RuntimeMode::Production;
        let config = apply_env_overrides(base, env(&[("APP_ENV", "staging")]));
        assert_eq!(config.runtime, RuntimeMode::Development);
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let config = apply_env_overrides(ServerConfig::default(), env(&[("PORT", "eighty")]));
        assert_eq!(config.listener.bind_address, "0.0.0.0:8090");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("docs_server_loader_test.toml");
        std::fs::write(&path, "[listener]\nbind_address = \"127.0.0.1:7000\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.listener.bind_address.rsplit_once(':').unwrap().0, "127.0.0.1");

        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
