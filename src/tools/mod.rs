//! Tool surface exposed to MCP callers.
//!
//! Each tool is a named operation that returns a single text string. Failures
//! arising from configuration or the warehouse are folded into that text at
//! the tool boundary; only malformed requests (unknown tool, missing
//! arguments) surface as protocol errors.

mod definitions;
mod handlers;

pub use definitions::{get_tool_definitions, ToolDefinition};

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::warehouse::WarehouseClient;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Holds the shared client and config, and dispatches tool calls by name.
pub struct ToolRegistry {
    client: Arc<dyn WarehouseClient>,
    config: BridgeConfig,
}

impl ToolRegistry {
    /// Creates a registry over the given client and configuration.
    pub fn new(client: Arc<dyn WarehouseClient>, config: BridgeConfig) -> Self {
        Self { client, config }
    }

    /// Dispatches a tool call by name.
    ///
    /// Returns the tool's text output, or a protocol error for an unknown
    /// tool or missing required arguments.
    pub async fn call(&self, name: &str, args: &Value) -> Result<String> {
        info!(tool = name, "tool call");

        match name {
            "execute_sql" => {
                let query = required_str(args, "query")?;
                Ok(self.execute_sql(query, optional_str(args, "warehouse_id")).await)
            }
            "list_databases" => Ok(self.list_databases().await),
            "list_catalogs" => Ok(self.list_catalogs().await),
            "list_schemas" => {
                let catalog = required_str(args, "catalog")?;
                Ok(self.list_schemas(catalog).await)
            }
            "list_tables" => {
                let database = required_str(args, "database")?;
                Ok(self.list_tables(database).await)
            }
            "list_tables_full" => {
                let catalog = required_str(args, "catalog")?;
                let schema = required_str(args, "schema")?;
                Ok(self.list_tables_full(catalog, schema).await)
            }
            "describe_table" => {
                let database = required_str(args, "database")?;
                let table = required_str(args, "table")?;
                Ok(self.describe_table(database, table).await)
            }
            "describe_table_full" => {
                let catalog = required_str(args, "catalog")?;
                let schema = required_str(args, "schema")?;
                let table = required_str(args, "table")?;
                Ok(self.describe_table_full(catalog, schema, table).await)
            }
            "get_table_relationships" => Ok(self.get_table_relationships().await),
            other => Err(BridgeError::protocol(format!("unknown tool '{other}'"))),
        }
    }
}

/// Extracts a required string argument.
fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| BridgeError::protocol(format!("missing required argument '{key}'")))
}

/// Extracts an optional string argument.
fn optional_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}
