//! Data structures for the aggregator collections and rollup views.

use crate::registry::Component;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an AI provider integration is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiServiceStatus {
    Active,
    Inactive,
}

/// An upstream AI provider integration. Independent of the component registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiService {
    pub name: String,
    pub status: AiServiceStatus,
    pub requests_per_hour: u64,
    /// Mean response time in milliseconds
    pub response_time: u64,
    pub cost_per_hour: f64,
}

/// Progress state of a deployment migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MigrationState {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
}

/// One deployment migration. `component` is a free-text label, not a registry id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub component: String,
    /// Target deployment platform
    pub target: String,
    /// Percent complete, 0-100
    pub progress: u8,
    pub status: MigrationState,
}

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Success,
    Info,
    Warning,
    Error,
}

/// A dashboard alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Overall system verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemHealth {
    Operational,
    Degraded,
}

/// GET /status rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatus {
    pub status: SystemHealth,
    pub online_components: usize,
    pub total_components: usize,
    pub timestamp: DateTime<Utc>,
}

/// Registry snapshot.
#[derive(Debug, Clone)]
pub struct ComponentList {
    pub components: Vec<Component>,
    pub timestamp: DateTime<Utc>,
}

/// Single component lookup.
#[derive(Debug, Clone)]
pub struct ComponentDetail {
    pub component: Component,
    pub timestamp: DateTime<Utc>,
}

/// Body of POST /components/{id}/health.
///
/// Fields stay loosely typed so that bad values surface as aggregator
/// validation errors rather than JSON decode failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthUpdateRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub health: Option<i64>,
}

/// Result of a health update.
#[derive(Debug, Clone)]
pub struct HealthUpdateResult {
    pub message: String,
    pub component: Component,
    pub timestamp: DateTime<Utc>,
}

/// GET /metrics rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemMetrics {
    pub total_requests: u64,
    pub active_users: u64,
    /// Mean AI service response time in milliseconds, rounded
    pub response_time: u64,
    /// Uptime percentage
    pub uptime: f64,
    pub timestamp: DateTime<Utc>,
}

/// GET /ai-services view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiServiceList {
    pub services: Vec<AiService>,
    pub timestamp: DateTime<Utc>,
}

/// GET /migration-status view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MigrationStatus {
    pub migrations: Vec<MigrationRecord>,
    pub overall_progress: f64,
    pub timestamp: DateTime<Utc>,
}

/// GET /alerts view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertList {
    pub alerts: Vec<Alert>,
    pub timestamp: DateTime<Utc>,
}

/// Body of POST /execute-command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub component_id: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
}

/// Simulated command execution result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResult {
    pub component_id: String,
    pub command: String,
    pub output: String,
    pub exit_code: i32,
    pub timestamp: DateTime<Utc>,
}

/// GET /websocket-test readiness message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeMessage {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
