//! End-to-end tool tests over mock warehouse clients.
//!
//! Exercise the full path a caller sees: registry dispatch, statement
//! execution, outcome classification, and text rendering.

use dbsql_bridge::config::BridgeConfig;
use dbsql_bridge::tools::ToolRegistry;
use dbsql_bridge::warehouse::{
    ColumnInfo, FailingWarehouseClient, MockWarehouseClient, StatementResponse, StatementState,
    WarehouseClient,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn test_config(default_warehouse: Option<&str>) -> BridgeConfig {
    BridgeConfig::new(
        "https://example.cloud.databricks.com",
        "dapi-test",
        default_warehouse.map(String::from),
        None,
    )
    .unwrap()
}

fn registry_over(client: Arc<dyn WarehouseClient>) -> ToolRegistry {
    ToolRegistry::new(client, test_config(Some("wh-1")))
}

fn columns(names: &[&str]) -> Vec<ColumnInfo> {
    names.iter().map(|n| ColumnInfo::named(*n)).collect()
}

#[tokio::test]
async fn execute_sql_renders_each_row_once_below_cap() {
    let rows = (1..=5)
        .map(|i| vec![json!(i.to_string()), json!(format!("user_{i}"))])
        .collect();
    let response = StatementResponse::succeeded(columns(&["id", "name"]), rows);
    let registry = registry_over(Arc::new(MockWarehouseClient::with_response(response)));

    let text = registry
        .call("execute_sql", &json!({ "query": "SELECT id, name FROM users" }))
        .await
        .unwrap();

    assert!(text.contains("Columns: id, name"));
    assert!(text.contains("Rows returned: 5"));
    for i in 1..=5 {
        assert_eq!(text.matches(&format!("Row {i}: ")).count(), 1);
    }
    assert!(!text.contains("more rows"));
}

#[tokio::test]
async fn execute_sql_truncates_twelve_rows_to_ten_plus_notice() {
    let rows = (1..=12).map(|i| vec![json!(i.to_string())]).collect();
    let response = StatementResponse::succeeded(columns(&["n"]), rows);
    let registry = registry_over(Arc::new(MockWarehouseClient::with_response(response)));

    let text = registry
        .call("execute_sql", &json!({ "query": "SELECT n FROM t" }))
        .await
        .unwrap();

    assert!(text.contains("Rows returned: 12"));
    assert!(text.contains("Row 10:"));
    assert!(!text.contains("Row 11:"));
    assert!(text.contains("... and 2 more rows"));
}

#[tokio::test]
async fn execute_sql_distinguishes_empty_zero_rows_and_failure() {
    let empty = registry_over(Arc::new(MockWarehouseClient::with_response(
        StatementResponse::succeeded_no_result(),
    )))
    .call("execute_sql", &json!({ "query": "CREATE TABLE t (id INT)" }))
    .await
    .unwrap();

    let zero_rows = registry_over(Arc::new(MockWarehouseClient::with_response(
        StatementResponse::succeeded(columns(&["id"]), Vec::new()),
    )))
    .call("execute_sql", &json!({ "query": "SELECT id FROM empty_t" }))
    .await
    .unwrap();

    let failed = registry_over(Arc::new(MockWarehouseClient::with_response(
        StatementResponse::failed("TABLE_OR_VIEW_NOT_FOUND"),
    )))
    .call("execute_sql", &json!({ "query": "SELECT * FROM missing" }))
    .await
    .unwrap();

    assert_eq!(empty, "Query executed successfully (no results returned)");
    assert!(zero_rows.contains("Rows returned: 0"));
    assert_eq!(failed, "Query failed: TABLE_OR_VIEW_NOT_FOUND");
    assert_ne!(empty, zero_rows);
    assert_ne!(empty, failed);
    assert_ne!(zero_rows, failed);
}

#[tokio::test]
async fn execute_sql_without_any_warehouse_id_never_contacts_service() {
    let mock = Arc::new(MockWarehouseClient::new());
    let registry = ToolRegistry::new(mock.clone(), test_config(None));

    let text = registry
        .call("execute_sql", &json!({ "query": "SELECT 1" }))
        .await
        .unwrap();

    assert!(text.starts_with("Error executing query:"));
    assert!(text.contains("no warehouse_id provided and no default warehouse configured"));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn execute_sql_explicit_warehouse_id_overrides_default() {
    let mock = Arc::new(MockWarehouseClient::new());
    let registry = ToolRegistry::new(mock.clone(), test_config(Some("default-wh")));

    registry
        .call(
            "execute_sql",
            &json!({ "query": "SELECT 1", "warehouse_id": "override-wh" }),
        )
        .await
        .unwrap();

    assert_eq!(mock.calls(), vec![("SELECT 1".to_string(), "override-wh".to_string())]);
}

#[tokio::test]
async fn list_tables_uses_table_name_column_and_skips_empty_names() {
    let response = StatementResponse::succeeded(
        columns(&["database", "tableName", "isTemporary"]),
        vec![
            vec![json!("sales"), json!("orders"), json!(false)],
            vec![json!("sales"), json!(""), json!("false")],
        ],
    );
    let registry = registry_over(Arc::new(MockWarehouseClient::with_response(response)));

    let text = registry
        .call("list_tables", &json!({ "database": "sales" }))
        .await
        .unwrap();

    assert_eq!(text, "Tables in 'sales': 1\n\n- orders");
}

#[tokio::test]
async fn list_schemas_without_name_column_uses_first_position() {
    let response = StatementResponse::succeeded(
        columns(&["namespace"]),
        vec![vec![json!("bronze")], vec![json!("silver")]],
    );
    let registry = registry_over(Arc::new(MockWarehouseClient::with_response(response)));

    let text = registry
        .call("list_schemas", &json!({ "catalog": "main" }))
        .await
        .unwrap();

    assert_eq!(text, "Schemas in 'main': 2\n\n- bronze\n- silver");
}

#[tokio::test]
async fn list_catalogs_reports_miss_rather_than_empty_list() {
    let response = StatementResponse::succeeded(columns(&["catalog"]), Vec::new());
    let registry = registry_over(Arc::new(MockWarehouseClient::with_response(response)));

    let text = registry.call("list_catalogs", &json!({})).await.unwrap();

    assert_eq!(text, "No catalogs found or unable to parse results");
}

#[tokio::test]
async fn list_tables_full_issues_qualified_show_statement() {
    let mock = Arc::new(MockWarehouseClient::new());
    let registry = registry_over(mock.clone());

    registry
        .call(
            "list_tables_full",
            &json!({ "catalog": "main", "schema": "gold" }),
        )
        .await
        .unwrap();

    assert_eq!(mock.calls()[0].0, "SHOW TABLES IN main.gold");
}

#[tokio::test]
async fn describe_table_renders_comments_only_when_present() {
    let response = StatementResponse::succeeded(
        columns(&["col_name", "data_type", "comment"]),
        vec![
            vec![json!("user_id"), json!("bigint"), json!("primary key")],
            vec![json!("email"), json!("string")],
        ],
    );
    let registry = registry_over(Arc::new(MockWarehouseClient::with_response(response)));

    let text = registry
        .call(
            "describe_table",
            &json!({ "database": "sales", "table": "users" }),
        )
        .await
        .unwrap();

    assert!(text.starts_with("Schema for sales.users:"));
    assert!(text.contains("  user_id: bigint -- primary key\n"));
    assert!(text.contains("  email: string\n"));
    assert!(!text.contains("email: string --"));
}

#[tokio::test]
async fn relationship_report_renders_fifteen_rows_uncapped() {
    let rows = (1..=15)
        .map(|i| {
            vec![
                json!(format!("orders_{i}")),
                json!(format!("customers_{i}")),
                json!("orders.customer_id = customers.id"),
            ]
        })
        .collect();
    let response = StatementResponse::succeeded(
        columns(&["left_table", "right_table", "join_condition"]),
        rows,
    );
    let registry = registry_over(Arc::new(MockWarehouseClient::with_response(response)));

    let text = registry
        .call("get_table_relationships", &json!({}))
        .await
        .unwrap();

    assert!(text.contains("Total relationships defined: 15"));
    for i in 1..=15 {
        assert!(text.contains(&format!("Relationship {i}:")), "missing row {i}");
    }
    assert!(!text.contains("more rows"));
}

#[tokio::test]
async fn non_terminal_response_folds_to_error_text_not_empty() {
    let mut response = StatementResponse::succeeded_no_result();
    response.status.state = StatementState::Pending;
    let registry = registry_over(Arc::new(MockWarehouseClient::with_response(response)));

    let text = registry
        .call("execute_sql", &json!({ "query": "SELECT 1" }))
        .await
        .unwrap();

    assert!(text.starts_with("Error executing query:"));
    assert!(text.contains("non-terminal"));
    assert_ne!(text, "Query executed successfully (no results returned)");
}

#[tokio::test]
async fn transport_faults_fold_into_error_text_for_every_tool() {
    let failing: Arc<dyn WarehouseClient> =
        Arc::new(FailingWarehouseClient::new("401 Unauthorized"));
    let registry = registry_over(failing);

    let cases = vec![
        (json!({"name": "execute_sql"}), json!({ "query": "SELECT 1" }), "Error executing query: 401 Unauthorized"),
        (json!({"name": "list_databases"}), json!({}), "Error listing databases: 401 Unauthorized"),
        (json!({"name": "list_catalogs"}), json!({}), "Error listing catalogs: 401 Unauthorized"),
        (json!({"name": "list_schemas"}), json!({ "catalog": "c" }), "Error listing schemas: 401 Unauthorized"),
        (json!({"name": "list_tables"}), json!({ "database": "d" }), "Error listing tables: 401 Unauthorized"),
        (json!({"name": "describe_table"}), json!({ "database": "d", "table": "t" }), "Error describing table: 401 Unauthorized"),
        (json!({"name": "get_table_relationships"}), json!({}), "Error retrieving table relationships: 401 Unauthorized"),
    ];

    for (name, args, expected) in cases {
        let text = registry
            .call(name["name"].as_str().unwrap(), &args)
            .await
            .unwrap();
        assert_eq!(text, expected);
    }
}
