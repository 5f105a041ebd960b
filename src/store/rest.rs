//! REST data store speaking the PostgREST dialect.

use super::{DataStore, StoreError};
use crate::config::StoreConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

/// Data store reached over HTTP.
///
/// - Rows via `GET {base}/rest/v1/{table}?select=*&limit=N`
/// - Inserts via `POST {base}/rest/v1/{table}` with `Prefer: return=representation`
/// - Functions via `POST {base}/rest/v1/rpc/{function}`
///
/// Every request carries the key both as `apikey` and as a Bearer token.
pub struct RestDataStore {
    base_url: String,
    api_key: String,
    client: Client,
    timeout: Duration,
}

impl RestDataStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: Client::new(),
            timeout,
        }
    }

    /// Build from `[store]` settings, reading the key from the environment.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let url = config.url.as_deref().ok_or(StoreError::MissingUrl)?;
        let api_key = config
            .api_key()
            .ok_or_else(|| StoreError::MissingApiKey(config.api_key_env.clone()))?;

        Ok(Self::new(
            url,
            api_key,
            Duration::from_secs(config.request_timeout_seconds),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, StoreError> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl DataStore for RestDataStore {
    async fn select(&self, table: &str, limit: usize) -> Result<Vec<Value>, StoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        tracing::debug!(table, limit, "Selecting rows");

        let limit = limit.to_string();
        let response = self
            .send(
                self.client
                    .get(&url)
                    .query(&[("select", "*"), ("limit", limit.as_str())]),
            )
            .await?;

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, StoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        tracing::debug!(table, "Inserting row");

        let response = self
            .send(
                self.client
                    .post(&url)
                    .header("prefer", "return=representation")
                    .json(&row),
            )
            .await?;

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn rpc(&self, function: &str, args: Value) -> Result<Value, StoreError> {
        let url = format!("{}/rest/v1/rpc/{}", self.base_url, function);
        tracing::debug!(function, "Calling store function");

        let response = self.send(self.client.post(&url).json(&args)).await?;

        response
            .json::<Value>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn test_store(base_url: String) -> RestDataStore {
        RestDataStore::new(base_url, "anon-key", Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_select_sends_auth_headers_and_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/projects")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("limit".into(), "1".into()),
            ]))
            .match_header("apikey", "anon-key")
            .match_header("authorization", "Bearer anon-key")
            .with_status(200)
            .with_body(r#"[{"id":1,"name":"OmniCognitor"}]"#)
            .create_async()
            .await;

        let rows = test_store(server.url()).select("projects", 1).await.unwrap();

        mock.assert_async().await;
        assert_eq!(rows, vec![json!({"id": 1, "name": "OmniCognitor"})]);
    }

    #[tokio::test]
    async fn test_select_error_status_keeps_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/secrets")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"message":"relation does not exist"}"#)
            .create_async()
            .await;

        let err = test_store(server.url()).select("secrets", 1).await.unwrap_err();

        mock.assert_async().await;
        match err {
            StoreError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("relation does not exist"));
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_select_non_array_is_decode_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/v1/tasks")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"not":"rows"}"#)
            .create_async()
            .await;

        let err = test_store(server.url()).select("tasks", 1).await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn test_insert_requests_representation() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/tasks")
            .match_header("prefer", "return=representation")
            .match_body(Matcher::Json(json!({"title": "deploy"})))
            .with_status(201)
            .with_body(r#"[{"id":7,"title":"deploy"}]"#)
            .create_async()
            .await;

        let rows = test_store(server.url())
            .insert("tasks", json!({"title": "deploy"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows[0]["id"], 7);
    }

    #[tokio::test]
    async fn test_rpc_posts_args() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/rpc/get_table_names")
            .match_header("authorization", "Bearer anon-key")
            .with_status(200)
            .with_body(r#"["projects","tasks"]"#)
            .create_async()
            .await;

        let value = test_store(server.url())
            .rpc("get_table_names", json!({}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(value, json!(["projects", "tasks"]));
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let store = test_store("http://127.0.0.1:1".to_string());
        let err = store.select("projects", 1).await.unwrap_err();
        assert!(matches!(err, StoreError::Http(_)));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let store = test_store("https://project.example.co/".to_string());
        assert_eq!(store.base_url(), "https://project.example.co");
    }

    #[test]
    fn test_from_config_requires_url() {
        let config = StoreConfig::default();
        assert_eq!(
            RestDataStore::from_config(&config).err(),
            Some(StoreError::MissingUrl)
        );
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = StoreConfig {
            url: Some("https://project.example.co".to_string()),
            api_key_env: "COMMAND_CENTER_TEST_REST_KEY_UNSET".to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(
            RestDataStore::from_config(&config).err(),
            Some(StoreError::MissingApiKey(
                "COMMAND_CENTER_TEST_REST_KEY_UNSET".to_string()
            ))
        );
    }
}
