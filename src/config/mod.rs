//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (APP_ENV, PORT, GITHUB_TOKEN)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → shared with the subsystems at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the runtime mode never changes
//! - All fields have defaults to allow running with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AssetsConfig, CacheControlConfig, ListenerConfig, ObservabilityConfig, RuntimeMode,
    ServerConfig, SiteConfig, StarsConfig,
};
