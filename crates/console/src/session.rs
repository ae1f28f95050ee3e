//! Session container and token persistence.
//!
//! The session is the one piece of state shared by every component: the
//! login view writes it, logout clears it and every outgoing request reads
//! it. It is initialised from the persisted value on start-up.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use common::{AppError, AppResult};
use domain::{SessionToken, TOKEN_STORAGE_KEY};

/// Persistence backend for the session token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any
    async fn load(&self) -> AppResult<Option<SessionToken>>;

    /// Persist a token, replacing any previous one
    async fn save(&self, token: &SessionToken) -> AppResult<()>;

    /// Remove the persisted token. Succeeds when nothing was stored.
    async fn clear(&self) -> AppResult<()>;
}

/// Token persisted as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> AppResult<Option<SessionToken>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let document: Map<String, Value> = serde_json::from_str(&content)
            .map_err(|e| AppError::storage(format!("Corrupted session file: {}", e)))?;

        Ok(document
            .get(TOKEN_STORAGE_KEY)
            .and_then(Value::as_str)
            .map(SessionToken::new))
    }

    async fn save(&self, token: &SessionToken) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut document = Map::new();
        document.insert(
            TOKEN_STORAGE_KEY.to_string(),
            Value::String(token.as_str().to_string()),
        );
        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| AppError::internal(format!("Failed to serialize session: {}", e)))?;

        tokio::fs::write(&self.path, content).await?;
        debug!("Session token written to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Token kept in memory only. Used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<SessionToken>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: SessionToken) -> Self {
        Self {
            slot: Mutex::new(Some(token)),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> AppResult<Option<SessionToken>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, token: &SessionToken) -> AppResult<()> {
        *self.slot.lock().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.slot.lock().await = None;
        Ok(())
    }
}

/// Well-scoped session container.
///
/// Holds at most one token. Cloning shares the same underlying slot.
#[derive(Clone)]
pub struct Session {
    current: Arc<RwLock<Option<SessionToken>>>,
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field(
                "active",
                &self
                    .current
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

impl Session {
    /// Initialise from the persisted value.
    ///
    /// An unreadable store starts an empty session rather than failing.
    pub async fn init(store: Arc<dyn TokenStore>) -> Self {
        let token = match store.load().await {
            Ok(token) => token,
            Err(e) => {
                warn!("Ignoring unreadable session store: {}", e);
                None
            }
        };

        if token.is_some() {
            info!("Resuming persisted session");
        }

        Self {
            current: Arc::new(RwLock::new(token)),
            store,
        }
    }

    /// Store a freshly issued token, overwriting any previous one.
    ///
    /// The token is usable for this run even if persisting it fails.
    pub async fn establish(&self, token: SessionToken) {
        if let Err(e) = self.store.save(&token).await {
            warn!("Session token could not be persisted: {}", e);
        }
        *self.current.write().await = Some(token);
    }

    /// Clear the token from memory and from the store.
    pub async fn teardown(&self) -> AppResult<()> {
        *self.current.write().await = None;
        self.store.clear().await
    }

    pub async fn token(&self) -> Option<SessionToken> {
        self.current.read().await.clone()
    }

    pub async fn is_active(&self) -> bool {
        self.current.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_token_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("reqres-console-{}-{}", name, std::process::id()))
            .join("session.json")
    }

    #[tokio::test]
    async fn file_store_round_trips_and_clears() {
        let path = temp_token_path("roundtrip");
        let store = FileTokenStore::new(&path);

        assert!(store.load().await.unwrap().is_none());

        store.save(&SessionToken::new("QpwL5tke4Pnpja7X4")).await.unwrap();
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("\"token\""));
        assert_eq!(
            store.load().await.unwrap(),
            Some(SessionToken::new("QpwL5tke4Pnpja7X4"))
        );

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        // clearing twice is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupted_file_is_a_storage_error() {
        let path = temp_token_path("corrupt");
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = FileTokenStore::new(&path);
        assert!(matches!(store.load().await, Err(AppError::Storage(_))));

        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn init_reads_persisted_token() {
        let store = Arc::new(MemoryTokenStore::with_token(SessionToken::new("abc")));
        let session = Session::init(store).await;

        assert!(session.is_active().await);
        assert_eq!(session.token().await, Some(SessionToken::new("abc")));
    }

    #[tokio::test]
    async fn later_login_overwrites_token() {
        let store = Arc::new(MemoryTokenStore::default());
        let session = Session::init(store.clone()).await;

        session.establish(SessionToken::new("first")).await;
        session.establish(SessionToken::new("second")).await;

        assert_eq!(session.token().await, Some(SessionToken::new("second")));
        assert_eq!(store.load().await.unwrap(), Some(SessionToken::new("second")));
    }

    #[tokio::test]
    async fn teardown_clears_memory_and_store() {
        let store = Arc::new(MemoryTokenStore::default());
        let session = Session::init(store.clone()).await;
        session.establish(SessionToken::new("token")).await;

        let shared = session.clone();
        session.teardown().await.unwrap();

        assert!(!shared.is_active().await);
        assert!(store.load().await.unwrap().is_none());
    }
}
