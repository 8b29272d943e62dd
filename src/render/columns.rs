//! Identifier-column resolution for catalog listing commands.
//!
//! `SHOW DATABASES` / `SHOW CATALOGS` / `SHOW SCHEMAS` / `SHOW TABLES` do not
//! guarantee a stable column layout across warehouse versions, so the column
//! holding the object name is located by an ordered chain of named
//! strategies rather than a fixed index. Each strategy is independently
//! testable and returns an optional position; the first hit wins.

use crate::warehouse::ColumnInfo;

/// Which catalog object a listing command enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingTarget {
    Databases,
    Catalogs,
    Schemas,
    Tables,
}

impl ListingTarget {
    /// Plural noun for user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Databases => "databases",
            Self::Catalogs => "catalogs",
            Self::Schemas => "schemas",
            Self::Tables => "tables",
        }
    }

    /// Capitalized plural noun for count lines.
    pub fn noun_capitalized(&self) -> &'static str {
        match self {
            Self::Databases => "Databases",
            Self::Catalogs => "Catalogs",
            Self::Schemas => "Schemas",
            Self::Tables => "Tables",
        }
    }
}

/// A single resolution strategy in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameColumnStrategy {
    /// A column is literally named `tableName` or `table` (case-insensitive).
    ExactNameMatch,
    /// `SHOW TABLES` conventionally returns `(namespace, name, is_temporary)`,
    /// so the name sits at position 1.
    TableConvention,
    /// Single-identifier listings put the name first.
    FirstColumn,
}

impl NameColumnStrategy {
    /// Attempts to resolve the identifier column position.
    pub fn resolve(&self, schema: &[ColumnInfo]) -> Option<usize> {
        match self {
            Self::ExactNameMatch => schema.iter().position(|col| {
                let lowered = col.name.to_lowercase();
                lowered == "tablename" || lowered == "table"
            }),
            Self::TableConvention => Some(1),
            Self::FirstColumn => Some(0),
        }
    }
}

/// Returns the strategy chain for a listing target, in priority order.
pub fn strategies_for(target: ListingTarget) -> &'static [NameColumnStrategy] {
    match target {
        ListingTarget::Tables => &[
            NameColumnStrategy::ExactNameMatch,
            NameColumnStrategy::TableConvention,
        ],
        ListingTarget::Databases | ListingTarget::Catalogs | ListingTarget::Schemas => &[
            NameColumnStrategy::ExactNameMatch,
            NameColumnStrategy::FirstColumn,
        ],
    }
}

/// Resolves the identifier column for a listing result.
///
/// The positional fallbacks always produce a position, but it may still be
/// out of range for a given row; callers skip such rows instead of failing.
pub fn resolve_name_column(schema: &[ColumnInfo], target: ListingTarget) -> Option<usize> {
    strategies_for(target)
        .iter()
        .find_map(|strategy| strategy.resolve(schema))
}
