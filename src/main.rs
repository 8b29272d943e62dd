//! dbsql-bridge - MCP server exposing SQL warehouse tools to AI agents.

mod cli;
mod config;
mod error;
mod logging;
mod mcp;
mod render;
mod statement;
mod tools;
mod warehouse;

use cli::Cli;
use error::Result;
use mcp::McpServer;
use std::sync::Arc;
use tools::ToolRegistry;
use tracing::{error, info};
use warehouse::HttpWarehouseClient;

#[tokio::main]
async fn main() {
    // Pick up a local .env before reading configuration
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_args();

    // Stdout carries the protocol stream, so logs go elsewhere
    match &cli.log_file {
        Some(Some(path)) => logging::init_file_logging(path),
        Some(None) => logging::init_file_logging(&logging::default_log_path()),
        None => logging::init_stderr_logging(),
    }

    if let Err(e) = run(cli).await {
        error!("{}: {}", e.category(), e.message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config()?;
    info!(host = %config.host, "starting dbsql-bridge");

    if config.warehouse_id.is_none() {
        info!("no default warehouse configured; tool calls must supply warehouse_id");
    }

    let client = Arc::new(HttpWarehouseClient::new(&config)?);
    let registry = ToolRegistry::new(client, config);
    let server = McpServer::new(registry);

    server
        .serve_stdio()
        .await
        .map_err(|e| error::BridgeError::internal(format!("stdio transport failed: {e}")))?;

    info!("stdin closed, shutting down");
    Ok(())
}
