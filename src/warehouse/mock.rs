//! Mock warehouse clients for testing.
//!
//! `MockWarehouseClient` replays scripted responses and records every call;
//! `FailingWarehouseClient` fails every call with a fixed transport error.

use crate::error::{BridgeError, Result};
use crate::warehouse::{StatementResponse, WarehouseClient};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A warehouse client that returns predefined responses.
pub struct MockWarehouseClient {
    queue: Mutex<VecDeque<StatementResponse>>,
    fallback: StatementResponse,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockWarehouseClient {
    /// Creates a mock that answers every call with an empty success.
    pub fn new() -> Self {
        Self::with_response(StatementResponse::succeeded_no_result())
    }

    /// Creates a mock that answers every call with the given response.
    pub fn with_response(response: StatementResponse) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: response,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock that replays the given responses in order, then falls
    /// back to an empty success.
    pub fn with_responses(responses: Vec<StatementResponse>) -> Self {
        Self {
            queue: Mutex::new(responses.into()),
            fallback: StatementResponse::succeeded_no_result(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns the `(statement, warehouse_id)` pairs seen so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

impl Default for MockWarehouseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WarehouseClient for MockWarehouseClient {
    async fn execute_statement(
        &self,
        statement: &str,
        warehouse_id: &str,
    ) -> Result<StatementResponse> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((statement.to_string(), warehouse_id.to_string()));

        let next = self.queue.lock().expect("mock queue poisoned").pop_front();
        Ok(next.unwrap_or_else(|| self.fallback.clone()))
    }
}

/// A warehouse client whose every call fails with a transport error.
pub struct FailingWarehouseClient {
    message: String,
}

impl FailingWarehouseClient {
    /// Creates a failing client with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl WarehouseClient for FailingWarehouseClient {
    async fn execute_statement(&self, _statement: &str, _warehouse_id: &str) -> Result<StatementResponse> {
        Err(BridgeError::transport(self.message.clone()))
    }
}
