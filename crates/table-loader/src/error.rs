//! Error types for the loading pipeline.

use thiserror::Error;

/// Main error type for load operations.
///
/// Four categories can surface from an insert call: the row source medium
/// (I/O), schema discovery, value conversion, and statement execution.
/// Every category is terminal for the current call - nothing is retried or
/// swallowed, and rows inserted before the failing one are not rolled back
/// here (the transaction boundary belongs to the caller).
#[derive(Error, Debug)]
pub enum LoadError {
    /// Row source medium could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited input could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row source is structurally invalid (bad header, ragged record).
    #[error("malformed row source: {0}")]
    MalformedSource(String),

    /// Catalog introspection failed for a table.
    #[error("schema discovery failed for table {table}: {message}")]
    Schema { table: String, message: String },

    /// A column or value could not be converted for binding.
    #[error("cannot convert {context}: {message}")]
    Conversion { context: String, message: String },

    /// The database reported a statement execution failure.
    #[error("statement execution failed: {message}")]
    SqlExecution { message: String },
}

impl LoadError {
    /// Create a Schema error for a table.
    pub fn schema(table: impl Into<String>, message: impl Into<String>) -> Self {
        LoadError::Schema {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a Conversion error naming the offending input.
    pub fn conversion(context: impl Into<String>, message: impl Into<String>) -> Self {
        LoadError::Conversion {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a SqlExecution error.
    pub fn sql(message: impl Into<String>) -> Self {
        LoadError::SqlExecution {
            message: message.into(),
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_constructors() {
        let err = LoadError::schema("users", "permission denied");
        assert_eq!(
            err.to_string(),
            "schema discovery failed for table users: permission denied"
        );

        let err = LoadError::conversion("column \"qty\"", "invalid digit");
        assert_eq!(err.to_string(), "cannot convert column \"qty\": invalid digit");

        let err = LoadError::sql("duplicate key");
        assert_eq!(err.to_string(), "statement execution failed: duplicate key");
    }

    #[test]
    fn test_format_detailed_includes_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = LoadError::from(io);
        let detailed = err.format_detailed();
        assert!(detailed.starts_with("Error: I/O error:"));
    }
}
