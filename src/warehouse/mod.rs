//! Warehouse client abstraction.
//!
//! Provides a trait-based interface over the remote statement-execution
//! service so the executor and tools can be tested against in-memory fakes.

mod http;
mod mock;
mod types;

pub use http::HttpWarehouseClient;
pub use mock::{FailingWarehouseClient, MockWarehouseClient};
pub use types::{
    ColumnInfo, ResultData, ResultManifest, ResultSchema, RowValues, Scalar, StatementErrorInfo,
    StatementResponse, StatementState, StatementStatus,
};

use crate::error::Result;
use async_trait::async_trait;

/// Interface to the remote warehouse service.
///
/// Implementations must only return responses in a terminal state; polling
/// through intermediate states is the client's job, not the caller's.
#[async_trait]
pub trait WarehouseClient: Send + Sync {
    /// Submits a statement to the given warehouse and waits for a terminal
    /// state.
    async fn execute_statement(
        &self,
        statement: &str,
        warehouse_id: &str,
    ) -> Result<StatementResponse>;
}
