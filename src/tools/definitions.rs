//! Tool definitions advertised over `tools/list`.

use serde::{Deserialize, Serialize};

/// Tool definition for MCP discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Returns the tool definitions exposed by the server.
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "execute_sql".to_string(),
            description: "Execute a SQL statement on the warehouse and return formatted \
                          results. Consider using get_table_relationships first to \
                          understand proper join logic for curated tables."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "SQL statement to execute"
                    },
                    "warehouse_id": {
                        "type": "string",
                        "description": "SQL warehouse id (uses the configured default if omitted)"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "list_databases".to_string(),
            description: "List all databases/schemas in the workspace".to_string(),
            input_schema: empty_object_schema(),
        },
        ToolDefinition {
            name: "list_catalogs".to_string(),
            description: "List all catalogs in the metastore".to_string(),
            input_schema: empty_object_schema(),
        },
        ToolDefinition {
            name: "list_schemas".to_string(),
            description: "List all schemas/databases in a specific catalog".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "catalog": {
                        "type": "string",
                        "description": "Name of the catalog"
                    }
                },
                "required": ["catalog"]
            }),
        },
        ToolDefinition {
            name: "list_tables".to_string(),
            description: "List all tables in a specific database".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "database": {
                        "type": "string",
                        "description": "Name of the database to list tables from"
                    }
                },
                "required": ["database"]
            }),
        },
        ToolDefinition {
            name: "list_tables_full".to_string(),
            description: "List all tables in a specific catalog and schema".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "catalog": {
                        "type": "string",
                        "description": "Name of the catalog"
                    },
                    "schema": {
                        "type": "string",
                        "description": "Name of the schema/database"
                    }
                },
                "required": ["catalog", "schema"]
            }),
        },
        ToolDefinition {
            name: "describe_table".to_string(),
            description: "Get schema information for a specific table".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "database": {
                        "type": "string",
                        "description": "Name of the database"
                    },
                    "table": {
                        "type": "string",
                        "description": "Name of the table"
                    }
                },
                "required": ["database", "table"]
            }),
        },
        ToolDefinition {
            name: "describe_table_full".to_string(),
            description: "Get schema information for a table using its full three-part name"
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "catalog": {
                        "type": "string",
                        "description": "Name of the catalog"
                    },
                    "schema": {
                        "type": "string",
                        "description": "Name of the schema/database"
                    },
                    "table": {
                        "type": "string",
                        "description": "Name of the table"
                    }
                },
                "required": ["catalog", "schema", "table"]
            }),
        },
        ToolDefinition {
            name: "get_table_relationships".to_string(),
            description: "Get predefined table join relationships from the curated \
                          relationships table. Use this to understand how tables should \
                          be joined together."
                .to_string(),
            input_schema: empty_object_schema(),
        },
    ]
}

fn empty_object_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {},
        "required": []
    })
}
