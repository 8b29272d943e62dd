//! MCP protocol integration tests.
//!
//! Drive the server through raw JSON-RPC lines, the way an MCP client does.

use dbsql_bridge::config::BridgeConfig;
use dbsql_bridge::mcp::McpServer;
use dbsql_bridge::tools::ToolRegistry;
use dbsql_bridge::warehouse::{ColumnInfo, MockWarehouseClient, StatementResponse};
use serde_json::{json, Value};
use std::sync::Arc;

fn server_with_response(response: StatementResponse) -> McpServer {
    let config = BridgeConfig::new(
        "https://example.cloud.databricks.com",
        "dapi-test",
        Some("wh-1".to_string()),
        None,
    )
    .unwrap();
    let client = Arc::new(MockWarehouseClient::with_response(response));
    McpServer::new(ToolRegistry::new(client, config))
}

async fn roundtrip(server: &McpServer, raw: &str) -> Value {
    let response = server.handle_request(raw).await.expect("expected a response");
    serde_json::from_str(&response).unwrap()
}

#[tokio::test]
async fn full_handshake_then_query() {
    let response = StatementResponse::succeeded(
        vec![ColumnInfo::named("id")],
        vec![vec![json!("1")]],
    );
    let server = server_with_response(response);

    let init = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#,
    )
    .await;
    assert!(init["result"]["capabilities"]["tools"].is_object());

    // Initialized notification draws no response.
    assert!(server
        .handle_request(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await
        .is_none());

    let call = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"execute_sql","arguments":{"query":"SELECT id FROM t"}}}"#,
    )
    .await;

    let text = call["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Columns: id"));
    assert!(text.contains("Row 1: {id: 1}"));
}

#[tokio::test]
async fn tools_list_advertises_all_nine_tools() {
    let server = server_with_response(StatementResponse::succeeded_no_result());

    let resp = roundtrip(&server, r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#).await;
    let tools = resp["result"]["tools"].as_array().unwrap();

    assert_eq!(tools.len(), 9);
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"execute_sql"));
    assert!(names.contains(&"get_table_relationships"));
}

#[tokio::test]
async fn remote_failure_arrives_as_text_not_rpc_error() {
    let server = server_with_response(StatementResponse::failed("PERMISSION_DENIED"));

    let resp = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"execute_sql","arguments":{"query":"SELECT 1"}}}"#,
    )
    .await;

    assert!(resp.get("error").is_none());
    assert_eq!(
        resp["result"]["content"][0]["text"],
        "Query failed: PERMISSION_DENIED"
    );
}

#[tokio::test]
async fn missing_tool_argument_is_invalid_params() {
    let server = server_with_response(StatementResponse::succeeded_no_result());

    let resp = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"list_tables","arguments":{}}}"#,
    )
    .await;

    assert_eq!(resp["error"]["code"], -32602);
    assert!(resp["error"]["message"]
        .as_str()
        .unwrap()
        .contains("database"));
}
