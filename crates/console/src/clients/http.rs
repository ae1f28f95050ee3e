//! Shared HTTP plumbing for the reqres endpoints.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;

use common::{ApiConfig, AppError, AppResult};
use domain::{API_KEY_HEADER, BEARER_TOKEN_PREFIX};

use crate::session::Session;

/// reqwest-backed client for the external user service.
///
/// Implements both [`AuthApi`](super::AuthApi) and [`UsersApi`](super::UsersApi).
#[derive(Clone)]
pub struct ReqresClient {
    http: Client,
    config: ApiConfig,
    session: Session,
}

impl std::fmt::Debug for ReqresClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqresClient")
            .field("base_url", &self.config.base_url)
            .field("has_api_key", &self.config.api_key.is_some())
            .field("session", &self.session)
            .finish()
    }
}

impl ReqresClient {
    /// Create a new client sharing the given session.
    pub fn new(config: ApiConfig, session: Session) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::config(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Creating reqres client with base URL {}", config.base_url);

        Ok(Self {
            http,
            config,
            session,
        })
    }

    /// Build a request WITHOUT the session token (login).
    pub(crate) fn public_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("{} {}", method, url);

        let builder = self.http.request(method, url);
        match &self.config.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    /// Build a request carrying the session token when one exists.
    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.public_request(method, path);
        match self.session.token().await {
            Some(token) => builder.header(
                AUTHORIZATION,
                format!("{}{}", BEARER_TOKEN_PREFIX, token.as_str()),
            ),
            None => builder,
        }
    }

    /// Send a request; any non-2xx status becomes [`AppError::Http`].
    pub(crate) async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(AppError::Http {
            status: status.as_u16(),
            body,
        })
    }
}
