//! Rollup configuration

use serde::{Deserialize, Serialize};

/// Tunables for the status rollups.
///
/// `active_users` and `uptime_percent` are reported verbatim by the metrics
/// rollup; nothing measures them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Fraction of components that must be online for "operational"
    pub operational_threshold: f64,
    pub active_users: u64,
    pub uptime_percent: f64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            operational_threshold: 0.8,
            active_users: 23,
            uptime_percent: 99.8,
        }
    }
}
