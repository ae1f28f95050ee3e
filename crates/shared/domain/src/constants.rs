//! Domain-level constants.
//!
//! Endpoint paths, persisted-state keys and the operator-facing messages
//! every front end of the console shows verbatim.

// =============================================================================
// External API
// =============================================================================

/// Default base URL of the public demo service
pub const DEFAULT_API_BASE_URL: &str = "https://reqres.in/api";

/// Authentication endpoint
pub const LOGIN_PATH: &str = "/login";

/// User collection endpoint (listing, update and delete by id)
pub const USERS_PATH: &str = "/users";

/// Header carrying the optional service API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Pagination
// =============================================================================

/// First page served by the listing endpoint
pub const FIRST_PAGE: u32 = 1;

// =============================================================================
// Session
// =============================================================================

/// Key under which the session token is persisted
pub const TOKEN_STORAGE_KEY: &str = "token";

// =============================================================================
// Operator messages
// =============================================================================

/// Shown on the login view after any rejected login attempt
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";

pub const MSG_USER_DELETED: &str = "User deleted successfully";

pub const MSG_DELETE_FAILED: &str = "Failed to delete user";

pub const MSG_USER_UPDATED: &str = "User updated successfully";

pub const MSG_UPDATE_FAILED: &str = "Failed to update user";

/// Empty-state indicator for the directory
pub const MSG_NO_USERS: &str = "No users found";

pub const MSG_NO_EDIT_SEED: &str = "No user selected for editing";
