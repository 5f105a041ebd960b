//! Structured logging helpers
//!
//! Filter directive construction, per-request span creation and field
//! helpers shared by the HTTP layer and the aggregator.

pub mod fields;
pub mod middleware;

pub use fields::{error_kind, truncate_for_log};
pub use middleware::{generate_request_id, make_request_span};

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level
/// and any module-specific log levels configured in the LoggingConfig.
///
/// # Examples
///
/// ```
/// use command_center::config::logging::{LogFormat, LoggingConfig};
/// use command_center::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("api".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
/// };
///
/// assert_eq!(build_filter_directives(&config), "info,command_center::api=debug");
/// ```
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    for (component, level) in config.sorted_component_levels() {
        filter_str.push_str(&format!(",command_center::{}={}", component, level));
    }

    filter_str
}
