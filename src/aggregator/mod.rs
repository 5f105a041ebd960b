//! # Status Aggregator
//!
//! Owns the component registry and the independent AI service, migration and
//! alert collections, and derives rollup views over them on demand.
//!
//! Every operation is a bounded, synchronous, in-memory computation. The only
//! write path is [`StatusAggregator::update_component_health`].

mod alerts;
mod error;
pub mod seed;
pub mod types;

pub use alerts::synthetic_alerts;
pub use error::AggregatorError;
pub use types::*;

use crate::clock::Clock;
use crate::config::{AggregatorConfig, CommandCenterConfig};
use crate::logging::truncate_for_log;
use crate::registry::{ComponentStatus, HealthUpdate, Registry, RegistryError};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Read model over the component registry and its sibling collections.
pub struct StatusAggregator {
    registry: Arc<Registry>,
    ai_services: Vec<AiService>,
    migrations: Vec<MigrationRecord>,
    settings: AggregatorConfig,
    clock: Arc<dyn Clock>,
}

impl StatusAggregator {
    pub fn new(
        registry: Arc<Registry>,
        ai_services: Vec<AiService>,
        migrations: Vec<MigrationRecord>,
        settings: AggregatorConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            ai_services,
            migrations,
            settings,
            clock,
        }
    }

    /// Build the aggregator from configuration, falling back to the demo
    /// seed for every collection the config leaves empty.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateComponent` if seeded ids collide.
    pub fn from_config(
        config: &CommandCenterConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, RegistryError> {
        let now = clock.now();

        let components = if config.components.is_empty() {
            seed::demo_components(now)
        } else {
            config
                .components
                .iter()
                .map(|c| c.to_component(now))
                .collect()
        };
        let registry = Arc::new(Registry::from_components(components)?);

        let ai_services = if config.ai_services.is_empty() {
            seed::demo_ai_services()
        } else {
            config.ai_services.clone()
        };

        let migrations = if config.migrations.is_empty() {
            seed::demo_migrations()
        } else {
            config.migrations.clone()
        };

        tracing::info!(
            components = registry.component_count(),
            ai_services = ai_services.len(),
            migrations = migrations.len(),
            "Seeded status aggregator"
        );

        Ok(Self::new(
            registry,
            ai_services,
            migrations,
            config.aggregator.clone(),
            clock,
        ))
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn settings(&self) -> &AggregatorConfig {
        &self.settings
    }

    /// Overall status: operational when at least `operational_threshold` of
    /// the components are online. An empty registry counts as operational.
    pub fn system_status(&self) -> SystemStatus {
        let components = self.registry.get_all_components();
        let total = components.len();
        let online = components
            .iter()
            .filter(|c| c.status == ComponentStatus::Online)
            .count();

        SystemStatus {
            status: classify(online, total, self.settings.operational_threshold),
            online_components: online,
            total_components: total,
            timestamp: self.now(),
        }
    }

    pub fn list_components(&self) -> ComponentList {
        ComponentList {
            components: self.registry.get_all_components(),
            timestamp: self.now(),
        }
    }

    /// # Errors
    ///
    /// Returns `AggregatorError::NotFound` when no component has this exact id.
    pub fn get_component(&self, id: &str) -> Result<ComponentDetail, AggregatorError> {
        let component = self
            .registry
            .get_component(id)
            .ok_or_else(|| AggregatorError::NotFound(id.to_string()))?;
        Ok(ComponentDetail {
            component,
            timestamp: self.now(),
        })
    }

    /// Validate and apply a partial health update.
    ///
    /// Unknown ids fail before the body is looked at. A body with an invalid
    /// field writes nothing. `last_seen` moves to now on every success.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `InvalidInput` for a status outside the
    /// closed set or a health outside 0-100.
    pub fn update_component_health(
        &self,
        id: &str,
        request: &HealthUpdateRequest,
    ) -> Result<HealthUpdateResult, AggregatorError> {
        if self.registry.get_component(id).is_none() {
            return Err(AggregatorError::NotFound(id.to_string()));
        }

        let update = validate_health_update(request)?;
        let now = self.now();
        let component = self.registry.update_health(id, update, now)?;

        tracing::info!(
            component_id = %id,
            status = %component.status,
            health = component.health,
            "Component health updated"
        );

        Ok(HealthUpdateResult {
            message: "Component health updated".to_string(),
            component,
            timestamp: now,
        })
    }

    pub fn metrics(&self) -> SystemMetrics {
        SystemMetrics {
            total_requests: self.registry.total_requests_per_hour(),
            active_users: self.settings.active_users,
            response_time: mean_response_time(&self.ai_services),
            uptime: self.settings.uptime_percent,
            timestamp: self.now(),
        }
    }

    pub fn list_ai_services(&self) -> AiServiceList {
        AiServiceList {
            services: self.ai_services.clone(),
            timestamp: self.now(),
        }
    }

    pub fn migration_status(&self) -> MigrationStatus {
        MigrationStatus {
            migrations: self.migrations.clone(),
            overall_progress: overall_progress(&self.migrations),
            timestamp: self.now(),
        }
    }

    pub fn list_alerts(&self) -> AlertList {
        let now = self.now();
        AlertList {
            alerts: synthetic_alerts(now),
            timestamp: now,
        }
    }

    /// Simulated command execution. Nothing runs; the result echoes the
    /// command against the component's display name with exit code 0.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when either field is missing or empty (checked first),
    /// `NotFound` for an unknown component.
    pub fn execute_command(&self, request: &CommandRequest) -> Result<CommandResult, AggregatorError> {
        let (component_id, command) = match (
            non_empty(request.component_id.as_deref()),
            non_empty(request.command.as_deref()),
        ) {
            (Some(id), Some(cmd)) => (id, cmd),
            _ => {
                return Err(AggregatorError::InvalidInput(
                    "Missing component_id or command".to_string(),
                ))
            }
        };

        let component = self
            .registry
            .get_component(component_id)
            .ok_or_else(|| AggregatorError::NotFound(component_id.to_string()))?;

        tracing::info!(
            component_id,
            command = %truncate_for_log(command, 100),
            "Simulated command execution"
        );

        Ok(CommandResult {
            component_id: component_id.to_string(),
            command: command.to_string(),
            output: format!(
                "Command \"{}\" executed successfully on {}",
                command, component.name
            ),
            exit_code: 0,
            timestamp: self.now(),
        })
    }

    pub fn websocket_probe(&self) -> ProbeMessage {
        ProbeMessage {
            message: "WebSocket endpoint ready".to_string(),
            timestamp: self.now(),
        }
    }
}

/// Classify the fleet. `total == 0` is vacuously operational.
pub fn classify(online: usize, total: usize, threshold: f64) -> SystemHealth {
    if total == 0 || online as f64 >= threshold * total as f64 {
        SystemHealth::Operational
    } else {
        SystemHealth::Degraded
    }
}

/// Mean AI service response time rounded half away from zero; 0 with no services.
pub fn mean_response_time(services: &[AiService]) -> u64 {
    if services.is_empty() {
        return 0;
    }
    let sum: u64 = services.iter().map(|s| s.response_time).sum();
    (sum as f64 / services.len() as f64).round() as u64
}

/// Mean migration progress; 0 with no records.
pub fn overall_progress(migrations: &[MigrationRecord]) -> f64 {
    if migrations.is_empty() {
        return 0.0;
    }
    let sum: u64 = migrations.iter().map(|m| u64::from(m.progress)).sum();
    sum as f64 / migrations.len() as f64
}

fn validate_health_update(request: &HealthUpdateRequest) -> Result<HealthUpdate, AggregatorError> {
    let status = request
        .status
        .as_deref()
        .map(str::parse::<ComponentStatus>)
        .transpose()
        .map_err(AggregatorError::InvalidInput)?;

    let health = match request.health {
        Some(h) if (0..=100).contains(&h) => Some(h as u8),
        Some(h) => {
            return Err(AggregatorError::InvalidInput(format!(
                "Invalid health {}: must be between 0 and 100",
                h
            )))
        }
        None => None,
    };

    Ok(HealthUpdate { status, health })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
