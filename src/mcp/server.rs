//! MCP server dispatch and stdio transport.

use crate::error::BridgeError;
use crate::mcp::rpc::{codes, JsonRpcRequest, JsonRpcResponse};
use crate::tools::{get_tool_definitions, ToolRegistry};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

/// MCP protocol revision this server speaks.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Dispatches MCP requests to the tool registry.
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    /// Creates a server over the given tool registry.
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Handles one raw JSON-RPC message.
    ///
    /// Returns the serialized response, or `None` for notifications.
    pub async fn handle_request(&self, raw: &str) -> Option<String> {
        let request: JsonRpcRequest = match serde_json::from_str(raw) {
            Ok(req) => req,
            Err(e) => {
                let resp = JsonRpcResponse::error(
                    Value::Null,
                    codes::PARSE_ERROR,
                    format!("parse error: {e}"),
                );
                return serde_json::to_string(&resp).ok();
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "notification received");
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        let response = self.dispatch(&request, id).await;
        serde_json::to_string(&response).ok()
    }

    async fn dispatch(&self, request: &JsonRpcRequest, id: Value) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": "dbsql-bridge",
                        "version": env!("CARGO_PKG_VERSION"),
                    }
                }),
            ),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                json!({ "tools": get_tool_definitions() }),
            ),
            "tools/call" => self.handle_tool_call(request, id).await,
            other => JsonRpcResponse::error(
                id,
                codes::METHOD_NOT_FOUND,
                format!("method '{other}' not supported"),
            ),
        }
    }

    async fn handle_tool_call(&self, request: &JsonRpcRequest, id: Value) -> JsonRpcResponse {
        let params = request.params.as_ref().unwrap_or(&Value::Null);
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(id, codes::INVALID_PARAMS, "missing tool name");
        };
        let empty_args = json!({});
        let arguments = params.get("arguments").unwrap_or(&empty_args);

        match self.registry.call(name, arguments).await {
            Ok(text) => JsonRpcResponse::success(
                id,
                json!({
                    "content": [{ "type": "text", "text": text }],
                    "isError": false,
                }),
            ),
            Err(BridgeError::Protocol(msg)) => {
                JsonRpcResponse::error(id, codes::INVALID_PARAMS, msg)
            }
            Err(other) => {
                // Tool handlers fold their own failures into text; anything
                // reaching here is a bug.
                warn!(error = %other, "unexpected error escaped tool boundary");
                JsonRpcResponse::error(id, codes::INTERNAL_ERROR, other.to_string())
            }
        }
    }

    /// Serves MCP over stdio: one JSON-RPC message per line in, one per
    /// line out. Returns when stdin closes.
    pub async fn serve_stdio(&self) -> std::io::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_request(&line).await {
                stdout.write_all(response.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        Ok(())
    }
}
