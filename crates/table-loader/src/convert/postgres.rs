//! PostgreSQL converter.

use crate::core::identifier::quote_pg;
use crate::core::traits::ColumnConverter;
use crate::core::value::SqlValue;
use crate::error::Result;

use super::TextFormat;

/// Converter for PostgreSQL: double-quote identifier quoting, `$N`
/// placeholders.
#[derive(Debug, Clone, Default)]
pub struct PostgresConverter {
    format: TextFormat,
}

impl PostgresConverter {
    /// Create a converter with the default text formats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with explicit text formats.
    pub fn with_format(format: TextFormat) -> Self {
        Self { format }
    }
}

impl ColumnConverter for PostgresConverter {
    fn name(&self) -> &str {
        "postgres"
    }

    fn convert(&self, type_code: i32, value: Option<&str>) -> Result<SqlValue> {
        super::convert_text(&self.format, type_code, value)
    }

    fn wrap_column_name(&self, name: &str) -> String {
        quote_pg(name)
    }

    fn param_placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }
}
