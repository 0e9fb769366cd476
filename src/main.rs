//! Binary entry point for the NFT gateway.
//!
//! Initializes the async runtime and structured logging, then delegates to
//! the CLI module which loads configuration, wires the operation service
//! and runs the HTTP server.

use nft_gateway::{cli, observability};
use tracing::error;

/// Entry point for the NFT gateway.
#[tokio::main]
async fn main() {
    // Initialize structured logging before anything else. Controlled via:
    // - RUST_LOG: log level (e.g. "debug", "nft_gateway=trace")
    // - LOG_JSON: JSON console output for production
    // - LOG_FILE: write logs to a daily-rotated file
    let log_level = std::env::var("RUST_LOG").ok();
    let log_file = std::env::var("LOG_FILE").ok().map(std::path::PathBuf::from);
    let json_output = std::env::var("LOG_JSON")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if let Err(e) = observability::init_tracing(log_level, log_file, json_output) {
        eprintln!("Failed to initialize tracing: {e}");
        std::process::exit(1);
    }

    if let Err(e) = cli::run().await {
        error!(error = %e, "Application error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
