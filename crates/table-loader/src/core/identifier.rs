//! Identifier validation and quoting for dynamic SQL.
//!
//! Identifiers (table and column names) cannot be bound as statement
//! parameters - only data values can. Any identifier that reaches generated
//! SQL text is validated here first; the dialect converters apply the
//! quoting.

/// Maximum identifier length (conservative limit across databases).
/// - PostgreSQL: 63 bytes
/// - SQL Server: 128 characters
/// - MySQL: 64 characters
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Validate an identifier before it is embedded in SQL text.
///
/// Rejects empty identifiers, identifiers containing null bytes, and
/// identifiers exceeding the maximum length. Returns the rejection message;
/// the caller picks the error category.
pub fn validate_identifier(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("identifier cannot be empty".to_string());
    }

    if name.contains('\0') {
        return Err(format!(
            "identifier contains null byte (possible injection attempt): {:?}",
            name
        ));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(format!(
            "identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        ));
    }

    Ok(())
}

/// Quote a SQL Server identifier using brackets, doubling closing brackets.
pub fn quote_mssql(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}

/// Quote a PostgreSQL identifier, doubling embedded double quotes.
pub fn quote_pg(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
