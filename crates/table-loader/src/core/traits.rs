//! Core traits for the insertion pipeline.
//!
//! Three capability boundaries keep the engine database-agnostic:
//!
//! - [`ColumnConverter`]: dialect-specific value conversion and quoting
//! - [`RowSource`]: produces the ordered textual rows to insert
//! - [`DatabaseClient`]: catalog introspection and statement execution

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::error::Result;

use super::schema::Column;
use super::value::SqlValue;

/// Textual row as produced by a [`RowSource`].
///
/// An ordered mapping from lower-cased column name to field text; `None`
/// marks the null-equivalent (an empty source field), distinct from an
/// empty string. Iteration order is the order columns appear in the
/// generated INSERT.
pub type Row = IndexMap<String, Option<String>>;

/// Row after conversion: ordered mapping from column name to native value.
pub type ConvertedRow = IndexMap<String, SqlValue>;

/// Converts textual values into native SQL values for one database dialect.
///
/// Implementations are total over the supported
/// [`TypeCode`](crate::core::types::TypeCode) universe: every supported code
/// converts or the call fails with the conversion category - raw text is
/// never passed through for an unknown code.
pub trait ColumnConverter: Send + Sync {
    /// Dialect identifier (e.g. "ansi", "mssql", "postgres").
    fn name(&self) -> &str;

    /// Convert a textual value into the native value for `type_code`.
    ///
    /// `None` is the null-equivalent and converts to [`SqlValue::Null`]
    /// without parsing, provided the type code itself is supported.
    fn convert(&self, type_code: i32, value: Option<&str>) -> Result<SqlValue>;

    /// Apply dialect identifier quoting to a column name.
    ///
    /// Pure: must not fail and must not depend on converter state beyond
    /// the dialect itself.
    fn wrap_column_name(&self, name: &str) -> String;

    /// Positional parameter placeholder for the 1-based `index`.
    fn param_placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }
}

/// Produces the ordered sequence of textual rows to insert.
pub trait RowSource {
    /// Load the rows.
    ///
    /// Keys must already be normalized to lower case by the source. The
    /// engine consumes the result exactly once, in order; implementations
    /// may be single-pass and need not be restartable.
    fn load(&mut self) -> Result<Vec<Row>>;
}

/// The database boundary: one catalog query per uncached table and one
/// parameterized statement execution per row.
///
/// The client is treated as exclusively owned for the duration of one
/// insert call; timeouts and cancellation are the implementation's concern.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Fetch the column definitions of `table` under `qualifier`, in
    /// catalog-reported order.
    ///
    /// Failures (connectivity, permissions, malformed catalog response)
    /// surface as the schema category.
    async fn fetch_columns(&self, qualifier: &str, table: &str) -> Result<Vec<Column>>;

    /// Execute a parameterized statement, binding `params` positionally.
    ///
    /// Returns the affected row count. Failures surface as the SQL
    /// execution category. Implementations must release any statement
    /// handle before returning, on success and failure alike.
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64>;
}
