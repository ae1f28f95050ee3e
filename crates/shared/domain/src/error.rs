//! Domain-level errors.
//!
//! These errors represent rule violations in the console's own state
//! (routing). They are independent of transport concerns.

use thiserror::Error;

/// Domain-specific errors for rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Route path not recognised
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}
