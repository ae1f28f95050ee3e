//! HTTP clients for the external user service.

mod auth_client;
mod http;
mod user_client;

pub use auth_client::AuthApi;
pub use http::ReqresClient;
pub use user_client::UsersApi;

#[cfg(any(test, feature = "test-utils"))]
pub use auth_client::MockAuthApi;
#[cfg(any(test, feature = "test-utils"))]
pub use user_client::MockUsersApi;
