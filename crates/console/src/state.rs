//! Application state for dependency injection.

use std::sync::Arc;

use common::AppResult;

use crate::clients::{AuthApi, ReqresClient, UsersApi};
use crate::config::ConsoleConfig;
use crate::session::{FileTokenStore, Session};

/// Services shared by every view of the console.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthApi>,
    pub users: Arc<dyn UsersApi>,
    pub session: Session,
}

impl AppState {
    /// Create new app state.
    pub fn new(auth: Arc<dyn AuthApi>, users: Arc<dyn UsersApi>, session: Session) -> Self {
        Self {
            auth,
            users,
            session,
        }
    }

    /// Wire the reqres client and the file-backed session from configuration.
    pub async fn from_config(config: &ConsoleConfig) -> AppResult<Self> {
        let store = Arc::new(FileTokenStore::new(&config.session.token_path));
        let session = Session::init(store).await;
        let client = Arc::new(ReqresClient::new(config.api.clone(), session.clone())?);

        Ok(Self::new(client.clone(), client, session))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
