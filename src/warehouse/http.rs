//! HTTP implementation of the warehouse client.
//!
//! Talks to the SQL Statement Execution API: submit with a server-side wait,
//! then poll the get-statement endpoint until a terminal state is observed.
//! Callers never see PENDING or RUNNING.

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::warehouse::{StatementResponse, WarehouseClient};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Server-side wait passed on submission, in seconds.
const WAIT_TIMEOUT_SECS: u64 = 30;

/// Delay between status polls once the server-side wait elapses.
const POLL_INTERVAL_MS: u64 = 1000;

/// Maximum number of status polls before giving up.
const MAX_POLL_ATTEMPTS: u32 = 120;

/// HTTP timeout for a single request.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Warehouse client over the statement-execution REST API.
#[derive(Debug, Clone)]
pub struct HttpWarehouseClient {
    http: reqwest::Client,
    host: String,
    token: String,
}

impl HttpWarehouseClient {
    /// Creates a client from the bridge configuration.
    pub fn new(config: &BridgeConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BridgeError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            host: config.host.clone(),
            token: config.token.clone(),
        })
    }

    fn statements_url(&self) -> String {
        format!("{}/api/2.0/sql/statements", self.host)
    }

    fn statement_url(&self, statement_id: &str) -> String {
        format!("{}/api/2.0/sql/statements/{statement_id}", self.host)
    }

    /// Parses a response body, surfacing non-2xx statuses as transport errors
    /// with whatever message the service provided.
    async fn decode(&self, response: reqwest::Response) -> Result<StatementResponse> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or(body);
            return Err(BridgeError::transport(format!(
                "warehouse API returned {status}: {detail}"
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| BridgeError::transport(format!("malformed warehouse response: {e}")))
    }

    async fn get_statement(&self, statement_id: &str) -> Result<StatementResponse> {
        let response = self
            .http
            .get(self.statement_url(statement_id))
            .bearer_auth(&self.token)
            .send()
            .await?;
        self.decode(response).await
    }
}

#[async_trait]
impl WarehouseClient for HttpWarehouseClient {
    async fn execute_statement(
        &self,
        statement: &str,
        warehouse_id: &str,
    ) -> Result<StatementResponse> {
        debug!(warehouse_id, "submitting statement");

        let response = self
            .http
            .post(self.statements_url())
            .bearer_auth(&self.token)
            .json(&json!({
                "statement": statement,
                "warehouse_id": warehouse_id,
                "wait_timeout": format!("{WAIT_TIMEOUT_SECS}s"),
                "format": "JSON_ARRAY",
                "disposition": "INLINE",
            }))
            .send()
            .await?;

        let mut current = self.decode(response).await?;

        // The server-side wait usually suffices; poll only if the statement
        // is still in flight when the submit call returns.
        let mut attempts = 0u32;
        while !current.status.state.is_terminal() {
            attempts += 1;
            if attempts > MAX_POLL_ATTEMPTS {
                warn!(
                    statement_id = %current.statement_id,
                    "statement did not reach a terminal state after {MAX_POLL_ATTEMPTS} polls"
                );
                return Err(BridgeError::transport(format!(
                    "statement {} did not finish within the polling limit",
                    current.statement_id
                )));
            }

            tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
            debug!(
                statement_id = %current.statement_id,
                attempt = attempts,
                "polling statement status"
            );
            current = self.get_statement(&current.statement_id).await?;
        }

        Ok(current)
    }
}
