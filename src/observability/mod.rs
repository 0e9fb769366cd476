//! Structured logging setup.
//!
//! Production-grade logging via the tracing framework: environment-driven
//! filtering, pretty console output for development, JSON for production,
//! and optional daily-rotating file output.
//!
//! # Environment Configuration
//!
//! ```bash
//! # Set log level for all modules
//! RUST_LOG=debug nft-gateway serve
//!
//! # Component-specific levels
//! RUST_LOG=nft_gateway=debug,reqwest=warn nft-gateway serve
//!
//! # JSON console output + rotating file
//! LOG_JSON=true LOG_FILE=./logs/gateway.log nft-gateway serve
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Initialize the tracing subscriber with configurable output formats.
///
/// # Arguments
///
/// * `log_level` - Level override (e.g. "debug"); falls back to `RUST_LOG`.
/// * `log_file` - Optional file path; enables daily log rotation.
/// * `json_output` - JSON console format for log aggregation.
///
/// Defaults to `info` for this crate and `warn` for dependencies, with
/// pretty console output.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the
/// subscriber fails to install.
pub fn init_tracing(
    log_level: Option<String>,
    log_file: Option<PathBuf>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = if let Ok(filter) = std::env::var("RUST_LOG") {
        EnvFilter::new(filter)
    } else if let Some(level) = log_level {
        EnvFilter::new(level)
    } else {
        // Default: info for the gateway, warn for dependencies
        EnvFilter::new("nft_gateway=info,warn")
    };

    let console_layer = if json_output {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer().pretty().with_target(true).boxed()
    };

    let file_layer = if let Some(ref path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file_appender = tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_name().unwrap_or_else(|| OsStr::new("gateway.log")),
        );

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The writer stops flushing once the guard drops; it must live as
        // long as the process.
        std::mem::forget(guard);

        // File output is always JSON for structured analysis
        Some(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_current_span(true)
                .with_target(true)
                .boxed(),
        )
    } else {
        None
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(file) = file_layer {
        subscriber.with(file).init();
    } else {
        subscriber.init();
    }

    info!(
        json_output,
        file_logging = log_file.is_some(),
        "Tracing initialized"
    );

    Ok(())
}
