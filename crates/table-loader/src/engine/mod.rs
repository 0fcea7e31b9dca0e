//! The insertion engine.
//!
//! [`TableInserter`] drives the whole pipeline for one target table: it
//! resolves the table's schema through the [`SchemaCache`], routes every row
//! through the prepare hook, assembles one parameterized INSERT per row from
//! the row's own column order, converts each field by the matching column's
//! type code, executes the statement, and collects the post hook's result
//! per row.
//!
//! Rows are processed strictly sequentially; the first error of any category
//! aborts the remaining rows of the call. Rows already executed are not
//! rolled back - the transaction boundary belongs to the caller.

use tracing::{debug, info};

use crate::cache::SchemaCache;
use crate::core::identifier::validate_identifier;
use crate::core::traits::{ColumnConverter, ConvertedRow, DatabaseClient, Row, RowSource};
use crate::error::{LoadError, Result};

/// Inserts rows from a [`RowSource`] into one database table.
///
/// Holds the client and schema cache by reference: the client is exclusively
/// owned for the duration of a call, while the cache may be shared with any
/// number of other inserters.
#[derive(Debug)]
pub struct TableInserter<'a, C> {
    client: &'a C,
    cache: &'a SchemaCache,
    qualifier: String,
}

impl<'a, C: DatabaseClient> TableInserter<'a, C> {
    /// Create an inserter targeting tables under `qualifier` (may be empty).
    pub fn new(client: &'a C, cache: &'a SchemaCache, qualifier: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            qualifier: qualifier.into(),
        }
    }

    /// Insert every row of `source` into `table`.
    ///
    /// The default form: equivalent to [`insert_with_hooks`] with identity
    /// hooks, returning each converted row in source order.
    ///
    /// [`insert_with_hooks`]: TableInserter::insert_with_hooks
    pub async fn insert<S, V>(
        &self,
        table: &str,
        source: &mut S,
        converter: &V,
    ) -> Result<Vec<ConvertedRow>>
    where
        S: RowSource,
        V: ColumnConverter + ?Sized,
    {
        self.insert_with_hooks(table, source, converter, |row| Ok(row), |converted| {
            Ok(converted)
        })
        .await
    }

    /// Insert every row of `source` into `table`, routing each row through
    /// `prepare` before conversion and `post` after execution.
    ///
    /// Returns the post hook results in row source order. The first error
    /// aborts the call; results accumulated before the failure are
    /// discarded.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Schema`]: schema resolution failed, or `table` is not
    ///   a valid identifier.
    /// - I/O categories: the row source could not be loaded.
    /// - [`LoadError::Conversion`]: a row key has no matching column, or a
    ///   value failed to convert. Raised before the row's statement
    ///   executes.
    /// - [`LoadError::SqlExecution`]: statement execution failed.
    pub async fn insert_with_hooks<S, V, P, F, T>(
        &self,
        table: &str,
        source: &mut S,
        converter: &V,
        mut prepare: P,
        mut post: F,
    ) -> Result<Vec<T>>
    where
        S: RowSource,
        V: ColumnConverter + ?Sized,
        P: FnMut(Row) -> Result<Row>,
        F: FnMut(ConvertedRow) -> Result<T>,
    {
        validate_identifier(table).map_err(|message| LoadError::schema(table, message))?;

        let rows = source.load()?;
        let mut results = Vec::with_capacity(rows.len());

        for (idx, row) in rows.into_iter().enumerate() {
            let def = self
                .cache
                .resolve(self.client, &self.qualifier, table)
                .await?;

            let row = prepare(row)?;

            let mut column_list = Vec::with_capacity(row.len());
            let mut placeholders = Vec::with_capacity(row.len());
            for (i, key) in row.keys().enumerate() {
                validate_identifier(key)
                    .map_err(|message| LoadError::conversion(format!("column {:?}", key), message))?;
                column_list.push(converter.wrap_column_name(key));
                placeholders.push(converter.param_placeholder(i + 1));
            }

            let sql = format!(
                "INSERT INTO {} ({}) VALUES ({})",
                table,
                column_list.join(", "),
                placeholders.join(", ")
            );
            debug!("row {}: {}", idx + 1, sql);

            // Convert the whole row before anything executes: an unknown
            // column or a bad value must fail the row without a statement.
            let mut converted = ConvertedRow::with_capacity(row.len());
            let mut params = Vec::with_capacity(row.len());
            for (key, text) in &row {
                let column = def.find_column(key).ok_or_else(|| {
                    LoadError::conversion(
                        format!("column {:?}", key),
                        format!("no such column in table {}", def.full_name()),
                    )
                })?;
                let value = converter
                    .convert(column.type_code, text.as_deref())
                    .map_err(|e| in_column(e, key))?;
                params.push(value.clone());
                converted.insert(key.clone(), value);
            }

            self.client
                .execute(&sql, &params)
                .await
                .map_err(|e| in_row(e, idx))?;

            results.push(post(converted)?);
        }

        info!("inserted {} rows into table '{}'", results.len(), table);
        Ok(results)
    }
}

/// Attach the column name to a converter error.
fn in_column(err: LoadError, column: &str) -> LoadError {
    match err {
        LoadError::Conversion { context, message } => LoadError::Conversion {
            context: format!("column {:?} ({})", column, context),
            message,
        },
        other => other,
    }
}

/// Attach the source row index to an execution error.
fn in_row(err: LoadError, idx: usize) -> LoadError {
    match err {
        LoadError::SqlExecution { message } => LoadError::SqlExecution {
            message: format!("row {}: {}", idx + 1, message),
        },
        other => other,
    }
}
