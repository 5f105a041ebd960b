//! # Telemetry Module
//!
//! Prometheus exposition of registry state and API activity, served at
//! `GET /prometheus`.
//!
//! **Counters:**
//! - `command_center_health_updates_total{component}` - Applied health updates
//! - `command_center_commands_total{component}` - Simulated command executions
//! - `command_center_api_errors_total{kind}` - Error responses by kind
//!
//! **Gauges:**
//! - `command_center_components_total` - Registered components
//! - `command_center_components{status}` - Components per status
//! - `command_center_component_health{component}` - Health percentage per component
//! - `command_center_requests_per_hour` - Summed component throughput
//! - `command_center_uptime_seconds` - Process uptime

pub mod handler;

pub use metrics_exporter_prometheus::PrometheusBuilder;

use crate::registry::{ComponentStatus, Registry};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Instant;

/// Derives gauges from the registry and records API counters.
pub struct TelemetryCollector {
    registry: Arc<Registry>,
    start_time: Instant,
    /// Sanitized Prometheus label values keyed by raw component id
    label_cache: DashMap<String, String>,
    prometheus_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl TelemetryCollector {
    pub fn new(
        registry: Arc<Registry>,
        start_time: Instant,
        prometheus_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        Self {
            registry,
            start_time,
            label_cache: DashMap::new(),
            prometheus_handle,
        }
    }

    /// Sanitize a label value to `[a-zA-Z_][a-zA-Z0-9_]*` (cached).
    pub fn sanitize_label(&self, label: &str) -> String {
        if let Some(cached) = self.label_cache.get(label) {
            return cached.clone();
        }

        let mut sanitized: String = label
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        if sanitized.is_empty() || sanitized.starts_with(|c: char| c.is_ascii_digit()) {
            sanitized.insert(0, '_');
        }

        self.label_cache.insert(label.to_string(), sanitized.clone());
        sanitized
    }

    /// Refresh every registry-derived gauge.
    pub fn update_component_gauges(&self) {
        let components = self.registry.get_all_components();

        metrics::gauge!("command_center_components_total").set(components.len() as f64);

        for status in ComponentStatus::ALL {
            let count = components.iter().filter(|c| c.status == status).count();
            metrics::gauge!("command_center_components", "status" => status.as_str())
                .set(count as f64);
        }

        for component in &components {
            let label = self.sanitize_label(&component.id);
            metrics::gauge!("command_center_component_health", "component" => label)
                .set(f64::from(component.health));
        }

        let throughput: u64 = components.iter().map(|c| c.requests_per_hour).sum();
        metrics::gauge!("command_center_requests_per_hour").set(throughput as f64);
        metrics::gauge!("command_center_uptime_seconds").set(self.uptime_seconds() as f64);
    }

    pub fn record_health_update(&self, component_id: &str) {
        let label = self.sanitize_label(component_id);
        metrics::counter!("command_center_health_updates_total", "component" => label)
            .increment(1);
    }

    pub fn record_command(&self, component_id: &str) {
        let label = self.sanitize_label(component_id);
        metrics::counter!("command_center_commands_total", "component" => label).increment(1);
    }

    pub fn record_api_error(&self, kind: &'static str) {
        metrics::counter!("command_center_api_errors_total", "kind" => kind).increment(1);
    }

    /// Seconds since the collector was created.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Render Prometheus metrics in text format.
    pub fn render_metrics(&self) -> String {
        self.prometheus_handle.render()
    }
}

/// Install the global Prometheus recorder.
///
/// Fails if a recorder is already installed; callers fall back to a
/// detached handle in that case.
pub fn setup_metrics(
) -> Result<metrics_exporter_prometheus::PrometheusHandle, Box<dyn std::error::Error>> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}
