//! Output formatting helpers for CLI commands

use crate::aggregator::{SystemHealth, SystemMetrics, SystemStatus};
use crate::api::ComponentView;
use crate::registry::ComponentStatus;
use crate::store::{ProbeOutcome, SchemaReport, TableSource, WriteOutcome};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;
use std::fmt::Write;

/// Colored label for a component status
pub fn status_label(status: ComponentStatus) -> String {
    match status {
        ComponentStatus::Online => "online".green().to_string(),
        ComponentStatus::Offline => "offline".red().to_string(),
        ComponentStatus::Pending => "pending".yellow().to_string(),
        ComponentStatus::Degraded => "degraded".magenta().to_string(),
    }
}

/// Status icon for a component status
pub fn status_icon(status: ComponentStatus) -> &'static str {
    match status {
        ComponentStatus::Online => "✓",
        ComponentStatus::Offline => "✗",
        ComponentStatus::Pending => "…",
        ComponentStatus::Degraded => "~",
    }
}

/// Format components as a table
pub fn format_components_table(components: &[ComponentView]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "ID", "Name", "Type", "Status", "Health", "Req/h", "Last Seen", "URL",
    ]);

    for c in components {
        table.add_row(vec![
            Cell::new(&c.id),
            Cell::new(&c.name),
            Cell::new(&c.component_type),
            Cell::new(status_label(c.status)),
            Cell::new(format!("{}%", c.health)),
            Cell::new(c.requests_per_hour),
            Cell::new(&c.last_seen),
            Cell::new(c.url.as_deref().unwrap_or("-")),
        ]);
    }

    table.to_string()
}

/// Format components as JSON
pub fn format_components_json(components: &[ComponentView]) -> String {
    serde_json::to_string_pretty(&json!({ "components": components }))
        .unwrap_or_else(|_| "{}".to_string())
}

/// Format the status rollup as pretty text
pub fn format_status_pretty(
    status: &SystemStatus,
    metrics: &SystemMetrics,
    components: &[ComponentView],
) -> String {
    let mut output = String::new();

    let verdict = match status.status {
        SystemHealth::Operational => "Operational".green(),
        SystemHealth::Degraded => "Degraded".yellow(),
    };

    let _ = writeln!(output, "Status: {}", verdict);
    let _ = writeln!(
        output,
        "Components: {}/{} online",
        status.online_components, status.total_components
    );
    let _ = writeln!(output, "Requests/hour: {}", metrics.total_requests);
    let _ = writeln!(output, "Avg AI response: {}ms", metrics.response_time);
    let _ = writeln!(output, "Uptime: {}%", metrics.uptime);

    if !components.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "Component Details:");
        for c in components {
            let _ = writeln!(
                output,
                "  {} {} ({}) - {}",
                status_icon(c.status),
                c.name,
                status_label(c.status),
                c.last_seen
            );
        }
    }

    output
}

/// Format the status rollup as JSON
pub fn format_status_json(status: &SystemStatus, metrics: &SystemMetrics) -> String {
    serde_json::to_string_pretty(&json!({
        "status": status,
        "metrics": metrics,
    }))
    .unwrap_or_else(|_| "{}".to_string())
}

/// Format a schema report as a table with a summary line
pub fn format_report_table(report: &SchemaReport) -> String {
    let mut output = String::new();

    match &report.source {
        TableSource::Rpc => {
            let _ = writeln!(output, "Tables listed by the store");
        }
        TableSource::Candidates { reason } => {
            let _ = writeln!(output, "Could not list tables ({}); probed candidates", reason);
        }
        TableSource::Explicit => {
            let _ = writeln!(output, "Probed the requested tables");
        }
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Result", "Columns"]);

    for probe in &report.tables {
        let (result, detail) = match &probe.outcome {
            ProbeOutcome::Accessible(schema) if schema.columns.is_empty() => {
                ("accessible".green().to_string(), "(no rows)".to_string())
            }
            ProbeOutcome::Accessible(schema) => {
                ("accessible".green().to_string(), schema.columns.join(", "))
            }
            ProbeOutcome::Failed { reason } => ("failed".red().to_string(), reason.clone()),
        };
        table.add_row(vec![Cell::new(&probe.table), Cell::new(result), Cell::new(detail)]);
    }

    let _ = writeln!(output, "{}", table);
    let _ = write!(
        output,
        "{} accessible, {} failed",
        report.accessible_count(),
        report.failed_count()
    );

    if let Some(check) = &report.write_check {
        let _ = writeln!(output);
        match &check.outcome {
            WriteOutcome::Written { rows } => {
                let _ = write!(
                    output,
                    "Write check on {}: {} ({} row(s) returned)",
                    check.table,
                    "written".green(),
                    rows.len()
                );
            }
            WriteOutcome::Failed { reason } => {
                let _ = write!(
                    output,
                    "Write check on {}: {} ({})",
                    check.table,
                    "failed".red(),
                    reason
                );
            }
        }
    }
    output
}

/// Format a schema report as JSON
pub fn format_report_json(report: &SchemaReport) -> String {
    serde_json::to_string_pretty(&json!({
        "report": report,
        "accessible": report.accessible_count(),
        "failed": report.failed_count(),
    }))
    .unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Component;
    use crate::store::{TableProbe, TableSchema, WriteCheck};
    use chrono::{Duration, TimeZone, Utc};

    fn create_test_view() -> ComponentView {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let component = Component::new("omnicognitor", "OmniCognitor", "chat", now - Duration::minutes(2))
            .with_status(ComponentStatus::Online)
            .with_health(98)
            .with_requests_per_hour(234);
        ComponentView::new(&component, now)
    }

    #[test]
    fn test_format_components_table_empty() {
        let output = format_components_table(&[]);
        assert!(output.contains("Name"));
    }

    #[test]
    fn test_format_components_table_with_data() {
        let output = format_components_table(&[create_test_view()]);
        assert!(output.contains("omnicognitor"));
        assert!(output.contains("98%"));
        assert!(output.contains("2 min ago"));
    }

    #[test]
    fn test_format_components_json() {
        let output = format_components_json(&[create_test_view()]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["components"][0]["id"], "omnicognitor");
        assert_eq!(parsed["components"][0]["lastSeen"], "2 min ago");
    }

    #[test]
    fn test_status_icons_distinct() {
        let icons: std::collections::HashSet<_> =
            ComponentStatus::ALL.iter().map(|s| status_icon(*s)).collect();
        assert_eq!(icons.len(), ComponentStatus::ALL.len());
    }

    #[test]
    fn test_format_report_table_counts() {
        let report = SchemaReport {
            source: TableSource::Candidates {
                reason: "function not found".to_string(),
            },
            tables: vec![
                TableProbe {
                    table: "projects".to_string(),
                    outcome: ProbeOutcome::Accessible(TableSchema {
                        columns: vec!["id".to_string(), "name".to_string()],
                        sample: None,
                    }),
                },
                TableProbe {
                    table: "secrets".to_string(),
                    outcome: ProbeOutcome::Failed {
                        reason: "Store returned 404".to_string(),
                    },
                },
            ],
            write_check: None,
        };

        let output = format_report_table(&report);
        assert!(output.contains("probed candidates"));
        assert!(!output.contains("Write check"));
        assert!(output.contains("id, name"));
        assert!(output.contains("1 accessible, 1 failed"));

        let parsed: serde_json::Value = serde_json::from_str(&format_report_json(&report)).unwrap();
        assert_eq!(parsed["accessible"], 1);
        assert_eq!(parsed["failed"], 1);
    }

    #[test]
    fn test_format_report_table_write_check() {
        let report = SchemaReport {
            source: TableSource::Explicit,
            tables: vec![],
            write_check: Some(WriteCheck {
                table: "ai_agents".to_string(),
                outcome: WriteOutcome::Failed {
                    reason: "Store returned 401: permission denied".to_string(),
                },
            }),
        };

        let output = format_report_table(&report);
        assert!(output.contains("Probed the requested tables"));
        assert!(output.contains("Write check on ai_agents"));
        assert!(output.contains("permission denied"));

        let parsed: serde_json::Value = serde_json::from_str(&format_report_json(&report)).unwrap();
        assert_eq!(parsed["report"]["source"]["kind"], "explicit");
        assert_eq!(parsed["report"]["write_check"]["result"], "failed");
    }
}
