//! `[logging]` section

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// How `serve` renders tracing events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Multi-line terminal output
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::UnknownLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base filter level for every target
    pub level: String,
    pub format: LogFormat,
    /// Levels for modules of this crate, keyed by path below `command_center`
    /// (`api`, `store`, `aggregator`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_levels: Option<HashMap<String, String>>,
}

impl LoggingConfig {
    /// Module overrides sorted by module path, so filter strings are stable.
    pub fn sorted_component_levels(&self) -> Vec<(&str, &str)> {
        let mut levels: Vec<(&str, &str)> = self
            .component_levels
            .iter()
            .flatten()
            .map(|(module, level)| (module.as_str(), level.as_str()))
            .collect();
        levels.sort_unstable();
        levels
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            component_levels: None,
        }
    }
}
