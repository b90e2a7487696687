//! SlashForge — interactions webhook gateway binary.
//!
//! Loads configuration from `SLASHFORGE_*` env vars, builds the command
//! registry, and serves the interactions endpoint until SIGINT/SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use slashforge_commands::CommandRegistry;
use slashforge_config::ServerConfig;
use slashforge_gateway::{server, AppState};
use slashforge_verify::SignatureVerifier;

#[derive(Parser)]
#[command(name = "slashforge")]
#[command(about = "SlashForge — chat-platform interactions webhook gateway")]
#[command(version)]
struct Cli {
    /// Log level when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit NDJSON logs instead of the human console format.
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactions gateway server
    Serve {
        /// Override SLASHFORGE_LISTEN_ADDR
        #[arg(short, long)]
        addr: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    slashforge_logging::init_logger(&cli.log_level, cli.json_logs);

    match cli.command {
        Commands::Serve { addr } => serve(addr).await,
    }
}

async fn serve(addr_override: Option<SocketAddr>) -> Result<()> {
    let mut config = ServerConfig::from_env().context("Failed to load configuration")?;
    if let Some(addr) = addr_override {
        config.listen_addr = addr;
    }

    let verifier = SignatureVerifier::new(&config.public_key)
        .context("SLASHFORGE_PUBLIC_KEY is not a usable Ed25519 key")?;

    // Command handlers are registered here at startup; the registry is
    // read-only once the server starts. Concrete commands live outside the
    // gateway and plug in through the CommandHandler trait.
    let registry = CommandRegistry::new();

    info!(
        addr = %config.listen_addr,
        commands = registry.len(),
        "Starting interactions gateway"
    );

    let listen_addr = config.listen_addr;
    let state = AppState::new(config, verifier, registry);
    server::start_server(listen_addr, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received SIGINT, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received SIGINT, shutting down...");
    }
}
