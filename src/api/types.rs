//! Wire types for the HTTP surface.
//!
//! Aggregator results carry domain values; these views render them for
//! clients, most notably turning `last_seen` into a recency string.

use crate::aggregator::{ComponentDetail, ComponentList, HealthUpdateResult};
use crate::registry::{format_last_seen, Component, ComponentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A component as presented to dashboard clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentView {
    pub id: String,
    pub name: String,
    pub status: ComponentStatus,
    #[serde(rename = "type")]
    pub component_type: String,
    /// Human recency string, e.g. "2 min ago"
    #[serde(rename = "lastSeen")]
    pub last_seen: String,
    pub last_seen_at: DateTime<Utc>,
    pub url: Option<String>,
    pub health: u8,
    pub requests_per_hour: u64,
}

impl ComponentView {
    pub fn new(component: &Component, now: DateTime<Utc>) -> Self {
        Self {
            id: component.id.clone(),
            name: component.name.clone(),
            status: component.status,
            component_type: component.component_type.clone(),
            last_seen: format_last_seen(component.last_seen, now),
            last_seen_at: component.last_seen,
            url: component.url.clone(),
            health: component.health,
            requests_per_hour: component.requests_per_hour,
        }
    }
}

/// GET /components response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentsResponse {
    pub components: Vec<ComponentView>,
    pub timestamp: DateTime<Utc>,
}

impl From<ComponentList> for ComponentsResponse {
    fn from(list: ComponentList) -> Self {
        Self {
            components: list
                .components
                .iter()
                .map(|c| ComponentView::new(c, list.timestamp))
                .collect(),
            timestamp: list.timestamp,
        }
    }
}

/// GET /components/{id} response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentResponse {
    pub component: ComponentView,
    pub timestamp: DateTime<Utc>,
}

impl From<ComponentDetail> for ComponentResponse {
    fn from(detail: ComponentDetail) -> Self {
        Self {
            component: ComponentView::new(&detail.component, detail.timestamp),
            timestamp: detail.timestamp,
        }
    }
}

/// POST /components/{id}/health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthUpdateResponse {
    pub message: String,
    pub component: ComponentView,
    pub timestamp: DateTime<Utc>,
}

impl From<HealthUpdateResult> for HealthUpdateResponse {
    fn from(result: HealthUpdateResult) -> Self {
        Self {
            message: result.message,
            component: ComponentView::new(&result.component, result.timestamp),
            timestamp: result.timestamp,
        }
    }
}
