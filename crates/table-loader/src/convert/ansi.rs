//! Dialect-neutral converter.

use crate::core::traits::ColumnConverter;
use crate::core::value::SqlValue;
use crate::error::Result;

use super::TextFormat;

/// Converter for engines with JDBC-style positional binding (H2 and
/// friends): column names are left untouched and placeholders are `?`.
#[derive(Debug, Clone, Default)]
pub struct AnsiConverter {
    format: TextFormat,
}

impl AnsiConverter {
    /// Create a converter with the default text formats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with explicit text formats.
    pub fn with_format(format: TextFormat) -> Self {
        Self { format }
    }
}

impl ColumnConverter for AnsiConverter {
    fn name(&self) -> &str {
        "ansi"
    }

    fn convert(&self, type_code: i32, value: Option<&str>) -> Result<SqlValue> {
        super::convert_text(&self.format, type_code, value)
    }

    fn wrap_column_name(&self, name: &str) -> String {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_is_identity() {
        let converter = AnsiConverter::new();
        assert_eq!(converter.wrap_column_name("Column1"), "Column1");
    }

    #[test]
    fn test_placeholder_is_question_mark() {
        let converter = AnsiConverter::new();
        assert_eq!(converter.param_placeholder(1), "?");
        assert_eq!(converter.param_placeholder(9), "?");
    }
}
