//! Data store connection configuration

use serde::{Deserialize, Serialize};

/// Connection settings for the hosted relational data store.
///
/// The API key itself never lives in the config file; `api_key_env` names
/// the environment variable that holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://project.example.co`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub api_key_env: String,
    pub request_timeout_seconds: u64,
    /// Tables probed when the store cannot list its own tables
    pub candidate_tables: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key_env: "COMMAND_CENTER_STORE_KEY".to_string(),
            request_timeout_seconds: 10,
            candidate_tables: [
                "ai_agents",
                "projects",
                "profiles",
                "telemedicine_consultations",
                "wellness_plans",
                "tasks",
                "messages",
                "chats",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl StoreConfig {
    /// Resolve the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.is_empty())
    }
}
