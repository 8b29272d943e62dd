//! Wire types for the warehouse statement-execution REST API.
//!
//! These mirror the JSON shapes of the SQL Statement Execution API with
//! `format=JSON_ARRAY` and inline disposition: a status block with a
//! lifecycle state, an optional manifest describing result columns, and an
//! optional inline `data_array` of row tuples.

use serde::{Deserialize, Serialize};

/// A single result cell: string, number, boolean, or null as delivered
/// by the service.
pub type Scalar = serde_json::Value;

/// A result row. Width normally equals the manifest column count, but
/// catalog-listing commands may return a different shape per warehouse
/// version, so nothing downstream may index rows by fixed position without
/// checking bounds.
pub type RowValues = Vec<Scalar>;

/// Lifecycle state of a submitted statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementState {
    Pending,
    Running,
    Succeeded,
    Failed,
    Canceled,
    Closed,
}

impl StatementState {
    /// Returns true once the statement can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::Failed | Self::Canceled | Self::Closed
        )
    }
}

/// Error details attached to a failed statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementErrorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Execution status of a statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementStatus {
    pub state: StatementState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<StatementErrorInfo>,
}

/// Descriptor for one result column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl ColumnInfo {
    /// Creates a column descriptor with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            position: None,
        }
    }
}

/// Ordered column list for a result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSchema {
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

/// Result metadata returned alongside a successful statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultManifest {
    #[serde(default)]
    pub schema: ResultSchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_row_count: Option<i64>,
}

/// Inline result payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_array: Option<Vec<RowValues>>,
}

/// Full response to an execute or get-statement call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementResponse {
    #[serde(default)]
    pub statement_id: String,
    pub status: StatementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ResultManifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultData>,
}

impl StatementResponse {
    /// Builds a succeeded response with the given columns and rows.
    ///
    /// Test helper, also used by the mock client.
    pub fn succeeded(columns: Vec<ColumnInfo>, rows: Vec<RowValues>) -> Self {
        let total = rows.len() as i64;
        Self {
            statement_id: String::new(),
            status: StatementStatus {
                state: StatementState::Succeeded,
                error: None,
            },
            manifest: Some(ResultManifest {
                schema: ResultSchema { columns },
                total_row_count: Some(total),
            }),
            result: Some(ResultData {
                data_array: Some(rows),
            }),
        }
    }

    /// Builds a succeeded response with no result payload (DDL and the like).
    pub fn succeeded_no_result() -> Self {
        Self {
            statement_id: String::new(),
            status: StatementStatus {
                state: StatementState::Succeeded,
                error: None,
            },
            manifest: None,
            result: None,
        }
    }

    /// Builds a failed response with the given error message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            statement_id: String::new(),
            status: StatementStatus {
                state: StatementState::Failed,
                error: Some(StatementErrorInfo {
                    error_code: None,
                    message: Some(message.into()),
                }),
            },
            manifest: None,
            result: None,
        }
    }
}
