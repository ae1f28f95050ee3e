//! reqres user console library.
//!
//! A login view, a paginated and searchable user list and an edit form,
//! all backed by the public reqres demo REST API.
//!
//! # Layers
//!
//! - **clients**: reqwest client and the `AuthApi` / `UsersApi` seams
//! - **session**: session container and token persistence
//! - **components**: login gate, user directory, user editor
//! - **console**: navigation state machine over the components
//! - **shell**: line-oriented terminal front end

pub mod clients;
pub mod components;
pub mod config;
pub mod console;
pub mod notice;
pub mod session;
pub mod shell;
pub mod state;

use tokio::io::BufReader;
use tracing::info;

use crate::config::ConsoleConfig;
use crate::console::Console;
use crate::session::{FileTokenStore, TokenStore};
use crate::shell::Shell;
use crate::state::AppState;

pub use common::{AppError, AppResult};

/// Run the interactive console on stdin/stdout.
pub async fn run_interactive(config: ConsoleConfig) -> AppResult<()> {
    info!("Using user service at {}", config.api.base_url);

    let state = AppState::from_config(&config).await?;
    let mut console = Console::start(state).await;

    let mut shell = Shell::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    shell.run(&mut console).await
}

/// Whether a session token is currently persisted.
pub async fn has_persisted_session(config: &ConsoleConfig) -> AppResult<bool> {
    let store = FileTokenStore::new(&config.session.token_path);
    Ok(store.load().await?.is_some())
}

/// Clear the persisted session token without starting the console.
pub async fn clear_persisted_session(config: &ConsoleConfig) -> AppResult<()> {
    FileTokenStore::new(&config.session.token_path).clear().await?;
    info!("Cleared session at {}", config.session.token_path.display());
    Ok(())
}
