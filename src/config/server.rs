//! Server configuration

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Optional prefix every route is mounted under (e.g. "/api/command-center")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Maximum accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            base_path: None,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServerConfig {
    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Public path of a route, including the base path when set.
    pub fn route_path(&self, route: &str) -> String {
        match &self.base_path {
            Some(base) => format!("{}{}", base, route),
            None => route.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.base_path.is_none());
        assert_eq!(config.max_body_bytes, 65536);
    }

    #[test]
    fn test_bind_addr_and_route_path() {
        let mut config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8081,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert_eq!(config.route_path("/status"), "/status");

        config.base_path = Some("/api/command-center".to_string());
        assert_eq!(config.route_path("/status"), "/api/command-center/status");
    }
}
