//! Result rendering.
//!
//! Converts a classified `StatementOutcome` into the plain-text form each
//! tool returns. Every mode renders `Failed` identically; success output is
//! mode-specific and always bounded (RawQuery truncates at a fixed row cap).

mod columns;

pub use columns::{resolve_name_column, strategies_for, ListingTarget, NameColumnStrategy};

use crate::statement::StatementOutcome;
use crate::warehouse::{RowValues, Scalar};
use std::fmt::Write as _;

/// Maximum rows shown by `RawQuery` rendering. Fixed truncation, no paging.
pub const ROW_PREVIEW_LIMIT: usize = 10;

/// How an outcome should be rendered.
#[derive(Debug, Clone, Copy)]
pub enum RenderMode<'a> {
    /// Generic query output: column list, row count, capped row preview.
    RawQuery,
    /// Catalog listing: one name per row, located heuristically.
    SingleColumnList {
        target: ListingTarget,
        /// Container being listed (database, catalog, or catalog.schema),
        /// if the command takes one.
        scope: Option<&'a str>,
    },
    /// DESCRIBE output: one `name: type [-- comment]` line per column.
    DescribeTable { table: &'a str },
    /// Labeled per-row blocks for the curated relationships table. Uncapped.
    RelationshipReport { source: &'a str },
}

/// Renders an outcome as the final tool text.
pub fn render(outcome: &StatementOutcome, mode: RenderMode) -> String {
    if let StatementOutcome::Failed(msg) = outcome {
        return format!("Query failed: {msg}");
    }

    match mode {
        RenderMode::RawQuery => render_raw_query(outcome),
        RenderMode::SingleColumnList { target, scope } => {
            render_listing(outcome, target, scope)
        }
        RenderMode::DescribeTable { table } => render_describe(outcome, table),
        RenderMode::RelationshipReport { source } => render_relationships(outcome, source),
    }
}

fn render_raw_query(outcome: &StatementOutcome) -> String {
    let StatementOutcome::Tabular { schema, rows } = outcome else {
        return "Query executed successfully (no results returned)".to_string();
    };

    let column_names: Vec<&str> = schema.iter().map(|c| c.name.as_str()).collect();

    let mut output = format!("Columns: {}\n\n", column_names.join(", "));
    let _ = writeln!(output, "Rows returned: {}\n", rows.len());

    for (i, row) in rows.iter().take(ROW_PREVIEW_LIMIT).enumerate() {
        let _ = writeln!(output, "Row {}: {}", i + 1, format_row_map(schema_names(schema), row));
    }

    if rows.len() > ROW_PREVIEW_LIMIT {
        let _ = write!(output, "\n... and {} more rows", rows.len() - ROW_PREVIEW_LIMIT);
    }

    output
}

fn render_listing(
    outcome: &StatementOutcome,
    target: ListingTarget,
    scope: Option<&str>,
) -> String {
    let StatementOutcome::Tabular { schema, rows } = outcome else {
        return "Statement completed but returned no result set".to_string();
    };

    let names = extract_names(schema, rows, target);

    if names.is_empty() {
        return match scope {
            Some(scope) => format!(
                "No {} found in '{scope}' or unable to parse results",
                target.noun()
            ),
            None => format!("No {} found or unable to parse results", target.noun()),
        };
    }

    let count_line = match scope {
        Some(scope) => format!("{} in '{scope}': {}", target.noun_capitalized(), names.len()),
        None => format!("{} found: {}", target.noun_capitalized(), names.len()),
    };

    let list = names
        .iter()
        .map(|n| format!("- {n}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{count_line}\n\n{list}")
}

fn render_describe(outcome: &StatementOutcome, table: &str) -> String {
    let StatementOutcome::Tabular { rows, .. } = outcome else {
        return format!("No schema information returned for '{table}'");
    };

    let mut output = format!("Schema for {table}:\n\n");

    if rows.is_empty() {
        output.push_str("(no columns reported)\n");
        return output;
    }

    for row in rows {
        // DESCRIBE has a fixed positional contract: name, type, then an
        // optional comment.
        let (Some(name), Some(data_type)) = (row.first(), row.get(1)) else {
            continue;
        };
        let _ = write!(output, "  {}: {}", display_scalar(name), display_scalar(data_type));
        if let Some(comment) = row.get(2).and_then(scalar_to_name) {
            let _ = write!(output, " -- {comment}");
        }
        output.push('\n');
    }

    output
}

fn render_relationships(outcome: &StatementOutcome, source: &str) -> String {
    let StatementOutcome::Tabular { schema, rows } = outcome else {
        return format!("No table relationships found in {source}");
    };

    let mut output = format!("TABLE JOIN RELATIONSHIPS ({source})\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");
    let _ = writeln!(output, "Total relationships defined: {}", rows.len());

    for (i, row) in rows.iter().enumerate() {
        let _ = writeln!(output, "\nRelationship {}:", i + 1);
        for (name, value) in schema_names(schema).iter().zip(row.iter()) {
            let _ = writeln!(output, "  {name}: {}", display_scalar(value));
        }
    }

    output
}

fn schema_names(schema: &[crate::warehouse::ColumnInfo]) -> Vec<&str> {
    schema.iter().map(|c| c.name.as_str()).collect()
}

/// Extracts resolved, non-empty names from listing rows in original order.
fn extract_names(
    schema: &[crate::warehouse::ColumnInfo],
    rows: &[RowValues],
    target: ListingTarget,
) -> Vec<String> {
    let Some(position) = resolve_name_column(schema, target) else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| row.get(position).and_then(scalar_to_name))
        .collect()
}

/// Formats a row as `{col: value, ...}` in schema order.
fn format_row_map(names: Vec<&str>, row: &RowValues) -> String {
    let pairs = names
        .iter()
        .zip(row.iter())
        .map(|(name, value)| format!("{name}: {}", display_scalar(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{pairs}}}")
}

/// Display form of a result cell.
fn display_scalar(value: &Scalar) -> String {
    match value {
        Scalar::Null => "NULL".to_string(),
        Scalar::String(s) => s.clone(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// A cell as an identifier name; null and empty strings count as missing.
fn scalar_to_name(value: &Scalar) -> Option<String> {
    match value {
        Scalar::Null => None,
        Scalar::String(s) if s.is_empty() => None,
        Scalar::String(s) => Some(s.clone()),
        Scalar::Bool(b) => Some(b.to_string()),
        Scalar::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
