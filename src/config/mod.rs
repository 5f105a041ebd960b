//! Configuration module for the command center
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`COMMAND_CENTER_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use command_center::config::CommandCenterConfig;
//!
//! let config = CommandCenterConfig::default();
//! assert_eq!(config.server.port, 5000);
//!
//! let toml = r#"
//! [server]
//! port = 9000
//! "#;
//! let config: CommandCenterConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! ```

pub mod aggregator;
pub mod error;
pub mod logging;
pub mod seed;
pub mod server;
pub mod store;

pub use aggregator::AggregatorConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use seed::ComponentConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;

use crate::aggregator::{AiService, MigrationRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Unified configuration for the command center.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CommandCenterConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Rollup thresholds and reported constants
    pub aggregator: AggregatorConfig,
    /// Hosted data store connection (used by `inspect` only)
    pub store: StoreConfig,
    /// Seed components; empty means the built-in demo set
    pub components: Vec<ComponentConfig>,
    /// Seed AI services; empty means the built-in demo set
    pub ai_services: Vec<AiService>,
    /// Seed migrations; empty means the built-in demo set
    pub migrations: Vec<MigrationRecord>,
}

impl CommandCenterConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p).map_err(|source| ConfigError::Read {
                    path: p.to_path_buf(),
                    source,
                })?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse {
                    path: p.to_path_buf(),
                    message: e.to_string(),
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports COMMAND_CENTER_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("COMMAND_CENTER_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("COMMAND_CENTER_HOST") {
            self.server.host = host;
        }

        if let Ok(level) = std::env::var("COMMAND_CENTER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("COMMAND_CENTER_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(url) = std::env::var("COMMAND_CENTER_STORE_URL") {
            if !url.is_empty() {
                self.store.url = Some(url);
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(validation("server.port", "port must be non-zero"));
        }
        if let Some(base) = &self.server.base_path {
            if !base.starts_with('/') || base.len() < 2 || base.ends_with('/') {
                return Err(validation(
                    "server.base_path",
                    "must start with '/' and must not end with '/'",
                ));
            }
        }

        let threshold = self.aggregator.operational_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(validation(
                "aggregator.operational_threshold",
                "must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..=100.0).contains(&self.aggregator.uptime_percent) {
            return Err(validation(
                "aggregator.uptime_percent",
                "must be between 0 and 100",
            ));
        }

        let mut seen = HashSet::new();
        for (i, component) in self.components.iter().enumerate() {
            if component.id.is_empty() {
                return Err(validation(
                    &format!("components[{}].id", i),
                    "id cannot be empty",
                ));
            }
            if !seen.insert(component.id.as_str()) {
                return Err(validation(
                    &format!("components[{}].id", i),
                    &format!("duplicate component id '{}'", component.id),
                ));
            }
            if component.health > 100 {
                return Err(validation(
                    &format!("components[{}].health", i),
                    "must be between 0 and 100",
                ));
            }
        }

        for (i, migration) in self.migrations.iter().enumerate() {
            if migration.progress > 100 {
                return Err(validation(
                    &format!("migrations[{}].progress", i),
                    "must be between 0 and 100",
                ));
            }
        }

        Ok(())
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
