//! Command-line interface for the NFT gateway.
//!
//! # Commands
//!
//! - `serve`: Run the HTTP gateway
//!
//! # Example
//!
//! ```bash
//! nft-gateway serve
//! nft-gateway serve --port 8080
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tracing::info;

use crate::api::server::run_server;
use crate::app_state::AppState;
use crate::config::Config;
use crate::error::NftResult;
use crate::service::RemoteNftService;

/// NFT lifecycle gateway for Celo, Ethereum and Flow
#[derive(Parser, Debug)]
#[command(name = "nft-gateway")]
#[command(about = "HTTP gateway for NFT lifecycle operations", long_about = None)]
#[command(version)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP gateway
    Serve {
        /// Listen port override (default: PORT env var or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Parse CLI arguments and execute the appropriate command.
///
/// # Errors
///
/// Returns an error if configuration loading or the server loop fails.
pub async fn run() -> NftResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => run_serve_command(port).await,
    }
}

async fn run_serve_command(port_override: Option<u16>) -> NftResult<()> {
    let config = Config::from_env()?;
    let port = port_override.unwrap_or(config.port());

    info!(upstream = config.service_url(), "Configuration loaded");

    let service = RemoteNftService::from_config(&config)?;
    let state = AppState::new(Arc::new(service));

    println!(
        "{}",
        format!("NFT gateway listening on port {port}").green().bold()
    );
    println!("  Swagger UI: http://localhost:{port}/swagger-ui");

    run_server(
        state,
        port,
        config.rate_limit_rpm(),
        config.cors_origins().to_vec(),
    )
    .await
}
