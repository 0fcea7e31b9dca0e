//! Core abstractions of the insertion pipeline.
//!
//! - [`schema`]: table and column metadata
//! - [`types`]: the fixed SQL type-code enumeration
//! - [`value`]: native value representation
//! - [`traits`]: converter, row source, and database boundaries
//! - [`identifier`]: identifier validation and quoting
//!
//! The core module defines database-agnostic abstractions; the dialect
//! converters under [`convert`](crate::convert) and caller-supplied
//! [`DatabaseClient`](traits::DatabaseClient) implementations plug into
//! them.

pub mod identifier;
pub mod schema;
pub mod traits;
pub mod types;
pub mod value;

// Re-export commonly used types for convenience
pub use schema::{Column, TableDef};
pub use traits::{ColumnConverter, ConvertedRow, DatabaseClient, Row, RowSource};
pub use types::TypeCode;
pub use value::SqlValue;
