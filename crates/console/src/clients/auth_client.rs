//! Authentication endpoint client.

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use common::AppResult;
use domain::{Credentials, LoginResponse, SessionToken, LOGIN_PATH};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::ReqresClient;

/// Exchanges credentials for an opaque session token.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /login`
    async fn login(&self, credentials: &Credentials) -> AppResult<SessionToken>;
}

#[async_trait]
impl AuthApi for ReqresClient {
    async fn login(&self, credentials: &Credentials) -> AppResult<SessionToken> {
        debug!("Logging in as {}", credentials.email);

        let request = self
            .public_request(Method::POST, LOGIN_PATH)
            .json(credentials);
        let response = self.send(request).await?;
        let body: LoginResponse = response.json().await?;

        Ok(body.token)
    }
}
