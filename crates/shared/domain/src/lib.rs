//! Domain layer - Core entities and rules of the user console.
//!
//! This crate contains pure domain logic with no transport dependencies.

pub mod constants;
pub mod error;
pub mod pagination;
pub mod route;
pub mod session;
pub mod user;

pub use constants::*;
pub use error::DomainError;
pub use pagination::{PageCursor, Paginated};
pub use route::{EditHandoff, Route};
pub use session::{Credentials, LoginResponse, SessionToken};
pub use user::{matching_indices, UpdatedUser, User, UserUpdate};

/// One page of users as returned by the listing endpoint
pub type UserPage = Paginated<User>;
