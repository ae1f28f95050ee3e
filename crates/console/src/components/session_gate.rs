//! Login view: exchanges credentials for a session token.

use std::sync::Arc;

use tracing::{info, warn};

use domain::Credentials;

use crate::clients::AuthApi;
use crate::session::Session;

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected,
}

/// Login form state.
pub struct SessionGate {
    auth: Arc<dyn AuthApi>,
    session: Session,
    email: String,
    password: String,
    error: Option<String>,
}

impl SessionGate {
    pub fn new(auth: Arc<dyn AuthApi>, session: Session) -> Self {
        Self {
            auth,
            session,
            email: String::new(),
            password: String::new(),
            error: None,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    /// Error shown under the form, if the last attempt was rejected
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Exchange the form's credentials for a token.
    ///
    /// Every failure, whatever its cause, leaves the same
    /// "Invalid credentials" error and no token.
    pub async fn submit(&mut self) -> LoginOutcome {
        let credentials = Credentials::new(self.email.clone(), self.password.clone());
        let result = self.auth.login(&credentials).await;
        drop(credentials);

        match result {
            Ok(token) => {
                self.session.establish(token).await;
                self.error = None;
                info!("Logged in as {}", self.email);
                LoginOutcome::Authenticated
            }
            Err(err) => {
                let err = err.into_authentication();
                warn!(code = err.code(), "Login rejected for {}", self.email);
                self.error = Some(err.user_message());
                LoginOutcome::Rejected
            }
        }
    }
}

impl std::fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGate")
            .field("email", &self.email)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
