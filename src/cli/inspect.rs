//! Inspect command implementation
//!
//! Probes the hosted data store and reports which tables are reachable and
//! what columns they carry. With `--write-test` it also inserts one marker
//! row to check that the key can write.

use crate::cli::output::{format_report_json, format_report_table};
use crate::cli::{load_local_config, InspectArgs};
use crate::store::{RestDataStore, SchemaProbe};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Marker row inserted by `--write-test`; `metadata` tags it for cleanup.
pub fn write_test_row(now: DateTime<Utc>) -> Value {
    json!({
        "name": "Inspect Write Check",
        "status": "testing",
        "metadata": {
            "created_by": "command-center inspect",
            "test_timestamp": now.to_rfc3339(),
        }
    })
}

/// Handle `command-center inspect`
pub async fn handle_inspect(args: &InspectArgs) -> anyhow::Result<String> {
    let mut config = load_local_config(&args.config)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to load configuration")?;

    if let Some(ref url) = args.store_url {
        config.store.url = Some(url.clone());
    }

    let store = RestDataStore::from_config(&config.store)
        .context("Data store is not configured")?;
    tracing::debug!(url = %store.base_url(), "Probing data store");

    let mut probe = if args.tables.is_empty() {
        SchemaProbe::new(config.store.candidate_tables.clone())
    } else {
        SchemaProbe::explicit(args.tables.clone())
    };
    if let Some(ref table) = args.write_test {
        probe = probe.with_write_check(table.clone(), write_test_row(Utc::now()));
    }

    let report = probe.run(&store).await;

    if args.json {
        Ok(format_report_json(&report))
    } else {
        Ok(format_report_table(&report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use std::path::PathBuf;

    fn inspect_args(store_url: Option<String>, tables: Vec<String>) -> InspectArgs {
        InspectArgs {
            json: true,
            store_url,
            tables,
            write_test: None,
            config: PathBuf::from("nonexistent-inspect.toml"),
        }
    }

    #[tokio::test]
    async fn test_inspect_without_key_fails() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            temp.path(),
            "[store]\napi_key_env = \"COMMAND_CENTER_TEST_INSPECT_KEY_UNSET\"",
        )
        .unwrap();

        let mut args = inspect_args(Some("https://project.example.co".to_string()), vec![]);
        args.config = temp.path().to_path_buf();

        let err = handle_inspect(&args).await.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("not configured"));
        assert!(message.contains("COMMAND_CENTER_TEST_INSPECT_KEY_UNSET"));
    }

    fn config_with_key(env_var: &str) -> tempfile::NamedTempFile {
        std::env::set_var(env_var, "anon");
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), format!("[store]\napi_key_env = \"{}\"", env_var)).unwrap();
        temp
    }

    #[tokio::test]
    async fn test_inspect_falls_back_to_configured_candidates() {
        let temp = config_with_key("COMMAND_CENTER_TEST_INSPECT_KEY");

        let mut server = Server::new_async().await;
        server
            .mock("POST", "/rest/v1/rpc/get_table_names")
            .with_status(404)
            .create_async()
            .await;
        server
            .mock("GET", Matcher::Regex(r"^/rest/v1/[a-z_]+".to_string()))
            .match_query(Matcher::Any)
            .match_header("apikey", "anon")
            .with_status(200)
            .with_body(r#"[{"id":1}]"#)
            .create_async()
            .await;

        let mut args = inspect_args(Some(server.url()), vec![]);
        args.config = temp.path().to_path_buf();

        let output = handle_inspect(&args).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["report"]["source"]["kind"], "candidates");
        assert!(parsed["accessible"].as_u64().unwrap() > 0);
        assert_eq!(parsed["report"]["tables"][0]["columns"][0], "id");
    }

    #[tokio::test]
    async fn test_inspect_named_tables_ignore_listing() {
        let temp = config_with_key("COMMAND_CENTER_TEST_INSPECT_NAMED_KEY");

        let mut server = Server::new_async().await;
        let listing = server
            .mock("POST", "/rest/v1/rpc/get_table_names")
            .with_status(200)
            .with_body(r#"["ai_agents"]"#)
            .expect(0)
            .create_async()
            .await;
        let agents = server
            .mock("GET", "/rest/v1/ai_agents")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .expect(0)
            .create_async()
            .await;
        server
            .mock("GET", "/rest/v1/projects")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"id":1,"name":"Portal"}]"#)
            .create_async()
            .await;

        let mut args = inspect_args(Some(server.url()), vec!["projects".to_string()]);
        args.config = temp.path().to_path_buf();

        let output = handle_inspect(&args).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["report"]["source"]["kind"], "explicit");
        let tables = parsed["report"]["tables"].as_array().unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0]["table"], "projects");
        assert_eq!(tables[0]["columns"], serde_json::json!(["id", "name"]));

        listing.assert_async().await;
        agents.assert_async().await;
    }

    #[tokio::test]
    async fn test_inspect_write_test_inserts_marker_row() {
        let temp = config_with_key("COMMAND_CENTER_TEST_INSPECT_WRITE_KEY");

        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/v1/ai_agents")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;
        let insert = server
            .mock("POST", "/rest/v1/ai_agents")
            .match_header("prefer", "return=representation")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "metadata": {"created_by": "command-center inspect"}
            })))
            .with_status(201)
            .with_body(r#"[{"id":7,"name":"Inspect Write Check"}]"#)
            .create_async()
            .await;

        let mut args = inspect_args(Some(server.url()), vec!["ai_agents".to_string()]);
        args.config = temp.path().to_path_buf();
        args.write_test = Some("ai_agents".to_string());

        let output = handle_inspect(&args).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let check = &parsed["report"]["write_check"];
        assert_eq!(check["table"], "ai_agents");
        assert_eq!(check["result"], "written");
        assert_eq!(check["rows"][0]["id"], 7);
        insert.assert_async().await;
    }

    #[test]
    fn test_write_test_row_is_tagged() {
        let now = chrono::TimeZone::with_ymd_and_hms(&Utc, 2025, 6, 1, 12, 0, 0).unwrap();
        let row = write_test_row(now);
        assert_eq!(row["metadata"]["created_by"], "command-center inspect");
        assert_eq!(row["metadata"]["test_timestamp"], "2025-06-01T12:00:00+00:00");
    }
}
