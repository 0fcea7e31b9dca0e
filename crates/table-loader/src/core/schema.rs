//! Schema model: immutable table and column metadata.
//!
//! These types are built once per distinct table from the database catalog
//! and shared read-only for the rest of the process (see
//! [`SchemaCache`](crate::cache::SchemaCache)).

use serde::{Deserialize, Serialize};

/// Column metadata as reported by the database catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name. Identity is case-insensitive.
    pub name: String,

    /// Declared type name (e.g. "VARCHAR", "BIGINT"), informational.
    pub type_name: String,

    /// SQL type code identifying the storage type
    /// (see [`TypeCode`](crate::core::types::TypeCode)).
    pub type_code: i32,

    /// Column size as reported by the catalog, informational.
    pub size: i32,
}

impl Column {
    /// Check this column's name against `name`, case-insensitively.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Immutable description of one table: qualifier, name, and ordered columns.
///
/// Column order is the catalog-reported order. Column names are unique
/// within a table under case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// Schema qualifier, may be empty.
    pub qualifier: String,

    /// Table name. Identity is case-insensitive.
    pub name: String,

    /// Column definitions in catalog order.
    pub columns: Vec<Column>,
}

impl TableDef {
    /// Create a table definition.
    pub fn new(
        qualifier: impl Into<String>,
        name: impl Into<String>,
        columns: Vec<Column>,
    ) -> Self {
        Self {
            qualifier: qualifier.into(),
            name: name.into(),
            columns,
        }
    }

    /// Get the qualified table name.
    pub fn full_name(&self) -> String {
        if self.qualifier.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.qualifier, self.name)
        }
    }

    /// Check identity against a `(qualifier, name)` pair, case-insensitively
    /// on both parts.
    pub fn matches(&self, qualifier: &str, name: &str) -> bool {
        self.qualifier.eq_ignore_ascii_case(qualifier) && self.name.eq_ignore_ascii_case(name)
    }

    /// Look up a column by name, case-insensitively.
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.is_named(name))
    }
}
