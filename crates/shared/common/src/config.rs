//! Shared configuration structures.

use std::path::PathBuf;

use domain::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};

/// Connection settings for the external REST service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Optional key sent as `x-api-key`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl ApiConfig {
    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            request_timeout_seconds: 30,
        }
    }
}

/// Where the session token is persisted between runs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub token_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_path: PathBuf::from(".reqres-console").join("session.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:8080/api/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(config.endpoint("/users"), "http://127.0.0.1:8080/api/users");
        assert_eq!(config.endpoint("login"), "http://127.0.0.1:8080/api/login");
    }

    #[test]
    fn defaults_point_at_public_demo_service() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint("/users"), "https://reqres.in/api/users");
        assert!(config.api_key.is_none());
    }
}
