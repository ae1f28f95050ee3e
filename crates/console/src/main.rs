//! reqres console - manage demo users from the terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use console_lib::config::ConsoleConfig;

#[derive(Parser)]
#[command(name = "reqres-console")]
#[command(author, version, about = "User management console for the reqres demo API")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the user service
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key sent as x-api-key
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Where the session token is persisted
    #[arg(long, global = true)]
    token_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive console (default)
    Run,
    /// Report whether a session token is persisted
    Status,
    /// Clear the persisted session token
    Logout,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing; stderr keeps log lines out of the rendered views
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ConsoleConfig::from_env().with_overrides(cli.base_url, cli.api_key, cli.token_path);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => console_lib::run_interactive(config).await?,
        Commands::Status => {
            let active = console_lib::has_persisted_session(&config).await?;
            let state = if active { "active" } else { "none" };
            println!("session: {} ({})", state, config.session.token_path.display());
        }
        Commands::Logout => console_lib::clear_persisted_session(&config).await?,
    }

    Ok(())
}
