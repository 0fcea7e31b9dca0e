//! # table-loader
//!
//! Schema-aware bulk insertion of delimited text into relational tables.
//!
//! The pipeline discovers a table's column schema from the database catalog
//! at runtime, caches it for the process lifetime, converts each textual
//! field into the column's native storage type, and executes one
//! parameterized INSERT per row - no hand-written per-table mapping code:
//!
//! - **Schema discovery** once per distinct table via [`SchemaCache`]
//! - **Type-directed conversion** through a dialect [`ColumnConverter`]
//! - **Dynamic SQL** with dialect identifier quoting and placeholders
//! - **Row hooks** to transform rows before insertion and collect a result
//!   per row after it
//!
//! The database itself stays behind the [`DatabaseClient`] trait: one
//! catalog query per uncached table, one statement execution per row.
//!
//! ## Example
//!
//! ```rust,ignore
//! use table_loader::{AnsiConverter, SchemaCache, TableInserter, TsvSource};
//!
//! let cache = SchemaCache::new();
//! let inserter = TableInserter::new(&client, &cache, "");
//! let rows = inserter
//!     .insert("test_schema", &mut TsvSource::new("data.tsv"), &AnsiConverter::new())
//!     .await?;
//! println!("inserted {} rows", rows.len());
//! ```

pub mod cache;
pub mod convert;
pub mod core;
pub mod engine;
pub mod error;
pub mod source;

// Re-exports for convenient access
pub use crate::cache::SchemaCache;
pub use crate::convert::{
    AnsiConverter, ConverterImpl, MssqlConverter, PostgresConverter, TextFormat,
};
pub use crate::core::schema::{Column, TableDef};
pub use crate::core::traits::{ColumnConverter, ConvertedRow, DatabaseClient, Row, RowSource};
pub use crate::core::types::TypeCode;
pub use crate::core::value::SqlValue;
pub use crate::engine::TableInserter;
pub use crate::error::{LoadError, Result};
