//! Statement executor: warehouse-id resolution and outcome classification.
//!
//! The executor turns the loosely-typed service response into a closed
//! variant that the renderer can match exhaustively, instead of re-deriving
//! status from nested optional fields at every call site.

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::warehouse::{ColumnInfo, RowValues, StatementResponse, StatementState, WarehouseClient};
use tracing::debug;

/// Terminal outcome of a statement, classified once after execution.
#[derive(Debug, Clone)]
pub enum StatementOutcome {
    /// The warehouse reported a failed execution.
    Failed(String),
    /// Execution succeeded with no result payload (DDL and the like).
    Empty,
    /// Execution succeeded with a tabular result, possibly zero rows.
    Tabular {
        schema: Vec<ColumnInfo>,
        rows: Vec<RowValues>,
    },
}

/// Submits statements and classifies their terminal outcome.
pub struct StatementExecutor<'a> {
    client: &'a dyn WarehouseClient,
    config: &'a BridgeConfig,
}

impl<'a> StatementExecutor<'a> {
    /// Creates a new executor over the given client and configuration.
    pub fn new(client: &'a dyn WarehouseClient, config: &'a BridgeConfig) -> Self {
        Self { client, config }
    }

    /// Executes a statement against the resolved warehouse.
    ///
    /// The warehouse id resolves explicit-argument-first, then the configured
    /// default; if neither exists this returns a configuration error without
    /// ever contacting the service. The statement text passes through
    /// verbatim.
    pub async fn execute(
        &self,
        statement: &str,
        warehouse_id: Option<&str>,
    ) -> Result<StatementOutcome> {
        let warehouse_id = self.config.resolve_warehouse_id(warehouse_id)?;

        debug!(%warehouse_id, "executing statement");
        let response = self.client.execute_statement(statement, &warehouse_id).await?;

        classify(response)
    }
}

/// Classifies a terminal-state response into an outcome.
fn classify(response: StatementResponse) -> Result<StatementOutcome> {
    match response.status.state {
        StatementState::Failed => {
            let message = response
                .status
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "no error message provided".to_string());
            Ok(StatementOutcome::Failed(message))
        }
        StatementState::Canceled => Ok(StatementOutcome::Failed(
            "statement execution was canceled".to_string(),
        )),
        StatementState::Closed => Ok(StatementOutcome::Failed(
            "statement result is no longer available".to_string(),
        )),
        StatementState::Pending | StatementState::Running => {
            // The client contract guarantees a terminal state; seeing one
            // here means the client implementation is broken.
            Err(BridgeError::internal(format!(
                "warehouse client returned non-terminal statement {}",
                response.statement_id
            )))
        }
        StatementState::Succeeded => {
            let Some(result) = response.result else {
                return Ok(StatementOutcome::Empty);
            };
            let schema = response
                .manifest
                .map(|m| m.schema.columns)
                .unwrap_or_default();
            let rows = result.data_array.unwrap_or_default();
            Ok(StatementOutcome::Tabular { schema, rows })
        }
    }
}
