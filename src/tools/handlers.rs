//! Per-tool handlers.
//!
//! Each handler submits one statement, renders the outcome in its mode, and
//! folds any error into an `"Error {doing X}: {message}"` line. The boundary
//! contract is that a tool always returns text.

use crate::render::{render, ListingTarget, RenderMode};
use crate::statement::StatementExecutor;
use crate::tools::ToolRegistry;

impl ToolRegistry {
    async fn run(
        &self,
        statement: &str,
        warehouse_id: Option<&str>,
        mode: RenderMode<'_>,
    ) -> crate::error::Result<String> {
        let executor = StatementExecutor::new(self.client.as_ref(), &self.config);
        let outcome = executor.execute(statement, warehouse_id).await?;
        Ok(render(&outcome, mode))
    }

    /// Executes an arbitrary SQL statement and formats the result.
    pub async fn execute_sql(&self, query: &str, warehouse_id: Option<&str>) -> String {
        match self.run(query, warehouse_id, RenderMode::RawQuery).await {
            Ok(text) => text,
            Err(e) => format!("Error executing query: {}", e.message()),
        }
    }

    /// Lists all databases in the workspace.
    pub async fn list_databases(&self) -> String {
        let mode = RenderMode::SingleColumnList {
            target: ListingTarget::Databases,
            scope: None,
        };
        match self.run("SHOW DATABASES", None, mode).await {
            Ok(text) => text,
            Err(e) => format!("Error listing databases: {}", e.message()),
        }
    }

    /// Lists all catalogs in the metastore.
    pub async fn list_catalogs(&self) -> String {
        let mode = RenderMode::SingleColumnList {
            target: ListingTarget::Catalogs,
            scope: None,
        };
        match self.run("SHOW CATALOGS", None, mode).await {
            Ok(text) => text,
            Err(e) => format!("Error listing catalogs: {}", e.message()),
        }
    }

    /// Lists all schemas in a catalog.
    pub async fn list_schemas(&self, catalog: &str) -> String {
        let statement = format!("SHOW SCHEMAS IN {catalog}");
        let mode = RenderMode::SingleColumnList {
            target: ListingTarget::Schemas,
            scope: Some(catalog),
        };
        match self.run(&statement, None, mode).await {
            Ok(text) => text,
            Err(e) => format!("Error listing schemas: {}", e.message()),
        }
    }

    /// Lists all tables in a database.
    pub async fn list_tables(&self, database: &str) -> String {
        let statement = format!("SHOW TABLES IN {database}");
        let mode = RenderMode::SingleColumnList {
            target: ListingTarget::Tables,
            scope: Some(database),
        };
        match self.run(&statement, None, mode).await {
            Ok(text) => text,
            Err(e) => format!("Error listing tables: {}", e.message()),
        }
    }

    /// Lists all tables under a catalog and schema.
    pub async fn list_tables_full(&self, catalog: &str, schema: &str) -> String {
        let qualified = format!("{catalog}.{schema}");
        let statement = format!("SHOW TABLES IN {qualified}");
        let mode = RenderMode::SingleColumnList {
            target: ListingTarget::Tables,
            scope: Some(&qualified),
        };
        match self.run(&statement, None, mode).await {
            Ok(text) => text,
            Err(e) => format!("Error listing tables: {}", e.message()),
        }
    }

    /// Describes a table by two-part name.
    pub async fn describe_table(&self, database: &str, table: &str) -> String {
        let qualified = format!("{database}.{table}");
        self.describe(&qualified).await
    }

    /// Describes a table by full three-part name.
    pub async fn describe_table_full(&self, catalog: &str, schema: &str, table: &str) -> String {
        let qualified = format!("{catalog}.{schema}.{table}");
        self.describe(&qualified).await
    }

    async fn describe(&self, qualified: &str) -> String {
        let statement = format!("DESCRIBE {qualified}");
        let mode = RenderMode::DescribeTable { table: qualified };
        match self.run(&statement, None, mode).await {
            Ok(text) => text,
            Err(e) => format!("Error describing table: {}", e.message()),
        }
    }

    /// Reports the curated join relationships.
    pub async fn get_table_relationships(&self) -> String {
        let source = self.config.relationships_table.clone();
        let statement = format!("SELECT * FROM {source}");
        let mode = RenderMode::RelationshipReport { source: &source };
        match self.run(&statement, None, mode).await {
            Ok(text) => text,
            Err(e) => format!("Error retrieving table relationships: {}", e.message()),
        }
    }
}
