//! Seed data configuration
//!
//! `[[components]]`, `[[ai_services]]` and `[[migrations]]` tables replace
//! the built-in demo collections when present.

use crate::registry::{Component, ComponentStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A component entry from the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default = "default_status")]
    pub status: ComponentStatus,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub health: u8,
    #[serde(default)]
    pub requests_per_hour: u64,
    /// How long before startup the component was last seen
    #[serde(default)]
    pub last_seen_minutes_ago: u32,
}

fn default_status() -> ComponentStatus {
    ComponentStatus::Pending
}

impl ComponentConfig {
    /// Materialize the registry entry relative to the startup instant.
    pub fn to_component(&self, now: DateTime<Utc>) -> Component {
        Component {
            id: self.id.clone(),
            name: self.name.clone(),
            status: self.status,
            component_type: self.component_type.clone(),
            last_seen: now - Duration::minutes(i64::from(self.last_seen_minutes_ago)),
            url: self.url.clone(),
            health: self.health,
            requests_per_hour: self.requests_per_hour,
        }
    }
}
