//! Command-line argument parsing for dbsql-bridge.
//!
//! Uses clap with environment fallbacks so the server can be configured
//! either by flags or by the conventional `DATABRICKS_*` variables.

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use clap::Parser;
use std::path::PathBuf;

/// MCP server exposing Databricks SQL warehouse tools to AI agents.
#[derive(Parser, Debug)]
#[command(name = "dbsql-bridge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Workspace host (e.g. https://adb-12345.6.azuredatabricks.net)
    #[arg(long, value_name = "HOST", env = "DATABRICKS_HOST")]
    pub host: Option<String>,

    /// Personal access token
    #[arg(long, value_name = "TOKEN", env = "DATABRICKS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Default SQL warehouse id (used when a tool call omits one)
    #[arg(short = 'w', long, value_name = "ID", env = "DATABRICKS_WAREHOUSE_ID")]
    pub warehouse_id: Option<String>,

    /// Source relation for the table-relationships report
    #[arg(long, value_name = "TABLE", env = "DBSQL_RELATIONSHIPS_TABLE")]
    pub relationships_table: Option<String>,

    /// Write logs to a file instead of stderr (platform state directory
    /// when PATH is omitted)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub log_file: Option<Option<PathBuf>>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the bridge configuration from parsed arguments.
    ///
    /// Host and token are required; the warehouse id may stay unset, in which
    /// case every tool call must supply one explicitly.
    pub fn to_config(&self) -> Result<BridgeConfig> {
        let host = self.host.clone().ok_or_else(|| {
            BridgeError::config("workspace host not set (--host or DATABRICKS_HOST)")
        })?;
        let token = self.token.clone().ok_or_else(|| {
            BridgeError::config("access token not set (--token or DATABRICKS_TOKEN)")
        })?;

        BridgeConfig::new(
            host,
            token,
            self.warehouse_id.clone(),
            self.relationships_table.clone(),
        )
    }
}
