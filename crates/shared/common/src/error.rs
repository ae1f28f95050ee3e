//! Unified error handling for the console.
//!
//! Provides a single error type covering:
//! - Transport failures talking to the external service
//! - The operator-facing failure taxonomy (authentication, fetch, mutation)
//! - Local session storage and configuration problems

use domain::{DomainError, MSG_INVALID_CREDENTIALS, MSG_NO_EDIT_SEED};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Listing
    #[error("Failed to fetch users: {0}")]
    Fetch(String),

    // Update / delete
    #[error("Failed to {action} user: {reason}")]
    Mutation { action: MutationAction, reason: String },

    // External service errors
    #[error("Request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    // Navigation
    #[error("No user selected for editing")]
    MissingEditSeed,

    #[error("Resource not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    // Local state
    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

/// Which mutation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    Update,
    Delete,
}

impl std::fmt::Display for MutationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationAction::Update => f.write_str("update"),
            MutationAction::Delete => f.write_str("delete"),
        }
    }
}

/// Coarse failure taxonomy used to decide how a failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Login rejected or unreachable; shown inline on the login view
    Authentication,
    /// Listing failed; logged only
    Fetch,
    /// Update or delete failed; shown as a blocking notice
    Mutation,
    /// Raw transport/status/decode failure not yet classified
    Transport,
    Navigation,
    Storage,
    Configuration,
    Internal,
}

impl AppError {
    /// Get error code for logs and scripted callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Fetch(_) => "FETCH_FAILED",
            AppError::Mutation { .. } => "MUTATION_FAILED",
            AppError::Http { .. } => "HTTP_ERROR",
            AppError::Transport(_) => "TRANSPORT_ERROR",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::MissingEditSeed => "MISSING_EDIT_SEED",
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Classify into the failure taxonomy
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::InvalidCredentials => FailureKind::Authentication,
            AppError::Fetch(_) => FailureKind::Fetch,
            AppError::Mutation { .. } => FailureKind::Mutation,
            AppError::Http { .. } | AppError::Transport(_) | AppError::Decode(_) => {
                FailureKind::Transport
            }
            AppError::MissingEditSeed | AppError::NotFound | AppError::Validation(_) => {
                FailureKind::Navigation
            }
            AppError::Storage(_) => FailureKind::Storage,
            AppError::Config(_) => FailureKind::Configuration,
            AppError::Internal(_) => FailureKind::Internal,
        }
    }

    /// Get operator-facing message (hides transport details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidCredentials => MSG_INVALID_CREDENTIALS.to_string(),
            AppError::MissingEditSeed => MSG_NO_EDIT_SEED.to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Mutation { action, reason } => {
                tracing::warn!("Mutation failed ({}): {}", action, reason);
                format!("Failed to {} user", action)
            }
            AppError::Fetch(msg) => {
                tracing::error!("Fetch error: {}", msg);
                "Failed to fetch users".to_string()
            }
            AppError::Http { status, body } => {
                tracing::error!("HTTP {}: {}", status, body);
                format!("The service responded with status {}", status)
            }
            AppError::Transport(msg) => {
                tracing::error!("Transport error: {}", msg);
                "The service could not be reached".to_string()
            }
            AppError::Decode(msg) => {
                tracing::error!("Decode error: {}", msg);
                "The service sent an unexpected response".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Reclassify any failure of the login exchange.
    ///
    /// Network and application failures are deliberately not distinguished.
    pub fn into_authentication(self) -> Self {
        tracing::debug!("Login exchange failed: {}", self);
        AppError::InvalidCredentials
    }

    /// Reclassify a listing failure
    pub fn into_fetch(self) -> Self {
        match self {
            AppError::Fetch(_) => self,
            other => AppError::Fetch(other.to_string()),
        }
    }

    /// Reclassify an update or delete failure
    pub fn into_mutation(self, action: MutationAction) -> Self {
        match self {
            AppError::Mutation { .. } => self,
            other => AppError::Mutation {
                action,
                reason: other.to_string(),
            },
        }
    }
}

// =============================================================================
// Transport Conversions
// =============================================================================

#[cfg(feature = "http")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return AppError::Http {
                status: status.as_u16(),
                body: err.to_string(),
            };
        }
        AppError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownRoute(_) => AppError::Validation(err.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_login_failure_becomes_invalid_credentials() {
        let transport = AppError::Transport("connection refused".to_string());
        let status = AppError::Http {
            status: 400,
            body: r#"{"error":"user not found"}"#.to_string(),
        };

        for err in [transport, status] {
            let reclassified = err.into_authentication();
            assert_eq!(reclassified.kind(), FailureKind::Authentication);
            assert_eq!(reclassified.user_message(), "Invalid credentials");
        }
    }

    #[test]
    fn mutation_messages_match_operator_wording() {
        let update = AppError::Transport("timeout".to_string()).into_mutation(MutationAction::Update);
        let delete = AppError::Http {
            status: 500,
            body: String::new(),
        }
        .into_mutation(MutationAction::Delete);

        assert_eq!(update.user_message(), "Failed to update user");
        assert_eq!(delete.user_message(), "Failed to delete user");
        assert_eq!(delete.kind(), FailureKind::Mutation);
        assert_eq!(delete.code(), "MUTATION_FAILED");
    }

    #[test]
    fn reclassification_is_idempotent() {
        let fetch = AppError::Fetch("boom".to_string()).into_fetch();
        assert!(matches!(fetch, AppError::Fetch(ref msg) if msg == "boom"));
    }

    #[test]
    fn domain_errors_map_to_navigation_kind() {
        let err = AppError::from(DomainError::UnknownRoute("/nope".to_string()));
        assert_eq!(err.kind(), FailureKind::Navigation);
        assert_eq!(AppError::MissingEditSeed.user_message(), "No user selected for editing");
    }

    #[test]
    fn option_ext_maps_none_to_not_found() {
        let missing: Option<u32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }
}
