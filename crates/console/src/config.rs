//! Console configuration.

use std::env;
use std::path::PathBuf;

use common::{ApiConfig, SessionConfig};
use domain::DEFAULT_API_BASE_URL;

/// Directory created under the platform config dir
const APP_DIR: &str = "reqres-console";

/// Console configuration.
#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    /// External service connection settings
    pub api: ApiConfig,
    /// Session token persistence
    pub session: SessionConfig,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig {
                base_url: env::var("REQRES_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
                api_key: env::var("REQRES_API_KEY").ok().filter(|k| !k.is_empty()),
                request_timeout_seconds: env::var("CONSOLE_REQUEST_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(30),
            },
            session: SessionConfig {
                token_path: env::var("CONSOLE_TOKEN_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_token_path()),
            },
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        api_key: Option<String>,
        token_path: Option<PathBuf>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if let Some(api_key) = api_key {
            self.api.api_key = Some(api_key);
        }
        if let Some(token_path) = token_path {
            self.session.token_path = token_path;
        }
        self
    }
}

/// `<config dir>/reqres-console/session.json`, or a dot-directory in the
/// working directory when the platform has no config dir.
pub fn default_token_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(APP_DIR).join("session.json"),
        None => SessionConfig::default().token_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let config = ConsoleConfig::default().with_overrides(
            Some("http://127.0.0.1:9000/api".to_string()),
            None,
            Some(PathBuf::from("/tmp/session.json")),
        );

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");
        assert!(config.api.api_key.is_none());
        assert_eq!(config.api.request_timeout_seconds, 30);
        assert_eq!(config.session.token_path, PathBuf::from("/tmp/session.json"));
    }

    #[test]
    fn default_token_path_ends_with_session_file() {
        let path = default_token_path();
        assert!(path.ends_with("session.json"));
        assert!(path.to_string_lossy().contains("reqres-console"));
    }
}
