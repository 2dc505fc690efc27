//! MCP Server Entry Point
//!
//! This is the main entry point for the OpenTofu MCP server. It loads the
//! settings, initializes logging, and starts the server with the configured
//! transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use opentofu_mcp_server::core::{McpServer, Settings, TransportConfig, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load settings from environment (and .env, if present)
    let settings = Settings::from_env()?;

    // Initialize logging
    init_logging(&settings.log_level, settings.debug);

    info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // Create the MCP server
    let server = McpServer::new(settings.clone());

    info!("Server initialized");

    // Create and run the transport service
    let transport = TransportService::new(TransportConfig::from_env(&settings));
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the settings' log level. The debug flag lowers the
/// level to DEBUG when the configured level is coarser.
fn init_logging(level: &str, debug: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let level = if debug && level < Level::DEBUG {
        Level::DEBUG
    } else {
        level
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
