//! Common utilities shared across the console crates.
//!
//! This crate provides:
//! - Unified error handling and the failure taxonomy
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, FailureKind, MutationAction, OptionExt};
