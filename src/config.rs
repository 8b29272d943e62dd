//! Configuration for dbsql-bridge.
//!
//! The bridge needs three values to talk to a warehouse: the workspace host,
//! an access token, and (optionally) a default SQL warehouse id. They are
//! resolved once at startup from CLI flags and environment variables, then
//! passed into components as an explicit config object so that tests can
//! inject fakes instead of reading the process environment.

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Source relation for the table-relationships report when none is configured.
pub const DEFAULT_RELATIONSHIPS_TABLE: &str = "wesley_farms.gold.table_relationships";

/// Resolved warehouse connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Workspace host, e.g. `https://adb-12345.6.azuredatabricks.net`.
    pub host: String,

    /// Personal access token used as a bearer credential.
    pub token: String,

    /// Default SQL warehouse id, used when a tool call does not supply one.
    pub warehouse_id: Option<String>,

    /// Fully qualified source relation for `get_table_relationships`.
    pub relationships_table: String,
}

impl BridgeConfig {
    /// Creates a config from already-resolved values, normalizing the host.
    pub fn new(
        host: impl Into<String>,
        token: impl Into<String>,
        warehouse_id: Option<String>,
        relationships_table: Option<String>,
    ) -> Result<Self> {
        let host = normalize_host(&host.into())?;
        let token = token.into();
        if token.is_empty() {
            return Err(BridgeError::config("access token must not be empty"));
        }

        Ok(Self {
            host,
            token,
            warehouse_id,
            relationships_table: relationships_table
                .unwrap_or_else(|| DEFAULT_RELATIONSHIPS_TABLE.to_string()),
        })
    }

    /// Resolves the effective warehouse id for a statement.
    ///
    /// Precedence: explicit argument, then the configured default. Absence of
    /// both is a terminal configuration error, reported before any statement
    /// is dispatched.
    pub fn resolve_warehouse_id(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(id) = explicit {
            if !id.is_empty() {
                return Ok(id.to_string());
            }
        }
        match &self.warehouse_id {
            Some(id) if !id.is_empty() => Ok(id.clone()),
            _ => Err(BridgeError::config(
                "no warehouse_id provided and no default warehouse configured",
            )),
        }
    }
}

/// Normalizes and validates the workspace host.
///
/// Accepts bare hostnames (scheme defaults to https) and strips any trailing
/// slash so that endpoint paths can be appended directly.
fn normalize_host(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BridgeError::config("workspace host must not be empty"));
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&with_scheme)
        .map_err(|e| BridgeError::config(format!("invalid workspace host '{trimmed}': {e}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(BridgeError::config(format!(
            "invalid workspace host '{trimmed}': unsupported scheme '{}'",
            url.scheme()
        )));
    }

    Ok(with_scheme.trim_end_matches('/').to_string())
}
