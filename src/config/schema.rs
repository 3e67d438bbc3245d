//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the docs server.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the docs server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Development or production. Fixed for the lifetime of the process.
    pub runtime: RuntimeMode,

    /// Cache-Control policy applied to every response.
    pub cache_control: CacheControlConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request limits.
    pub limits: LimitsConfig,

    /// External star-count source.
    pub stars: StarsConfig,

    /// Static asset locations.
    pub assets: AssetsConfig,

    /// Site identity shown in rendered pages.
    pub site: SiteConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8090").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8090".to_string(),
        }
    }
}

/// Process-wide runtime mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[default]
    Development,
    Production,
}

impl RuntimeMode {
    pub fn is_development(self) -> bool {
        matches!(self, RuntimeMode::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuntimeMode::Development => "development",
            RuntimeMode::Production => "production",
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(RuntimeMode::Production),
            "development" | "dev" | "" => Ok(RuntimeMode::Development),
            other => Err(format!("unknown runtime mode '{}'", other)),
        }
    }
}

/// Cache-Control configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheControlConfig {
    /// max-age emitted in production, in seconds. Must be positive.
    pub max_age_secs: u64,
}

impl Default for CacheControlConfig {
    fn default() -> Self {
        Self {
            max_age_secs: 31_536_000,
        }
    }
}

/// Timeout configuration for request handling.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Time allowed to produce response headers, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024,
        }
    }
}

/// GitHub star-count source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StarsConfig {
    /// Enable the background refresh task. When disabled the count stays at zero.
    pub enabled: bool,

    /// GitHub REST API base URL.
    pub api_base_url: String,

    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Refresh period in seconds.
    pub ttl_secs: u64,

    /// Upper bound for a single fetch, in seconds.
    pub request_timeout_secs: u64,

    /// Optional API token, sent as a bearer token.
    pub token: Option<String>,
}

impl StarsConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Public repository page, linked from the page header.
    pub fn repository_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base_url: "https://api.github.com".to_string(),
            owner: "templui".to_string(),
            repo: "templui".to_string(),
            ttl_secs: 3600,
            request_timeout_secs: 10,
            token: None,
        }
    }
}

/// Static file locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served under `/assets/`.
    pub asset_dir: String,

    /// Directory holding `sitemap.xml` and `robots.txt`.
    pub static_dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            asset_dir: "./assets".to_string(),
            static_dir: "./static".to_string(),
        }
    }
}

/// Site identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the header and page titles.
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "templUI".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.runtime, RuntimeMode::Development);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8090");
        assert_eq!(config.stars.ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_partial_config() {
        let config: ServerConfig = toml::from_str(
            r#"
            runtime = "production"

            [cache_control]
            max_age_secs = 600

            [stars]
            owner = "acme"
            repo = "widgets"
            "#,
        )
        .unwrap();

        assert_eq!(config.runtime, RuntimeMode::Production);
        assert_eq!(config.cache_control.max_age_secs, 600);
        assert_eq!(config.stars.repository_url(), "https://github.com/acme/widgets");
        assert_eq!(config.stars.api_base_url, "https://api.github.com");
    }

    #[test]
    fn test_runtime_mode_parse() {
        assert_eq!("production".parse::<RuntimeMode>().unwrap(), RuntimeMode::Production);
        assert_eq!("Dev".parse::<RuntimeMode>().unwrap(), RuntimeMode::Development);
        assert!("staging".parse::<RuntimeMode>().is_err());
    }
}
