//! Tab-separated row source with a mandatory header record.

use std::path::PathBuf;

use tracing::debug;

use crate::core::traits::{Row, RowSource};
use crate::error::{LoadError, Result};

/// Reads a UTF-8 tab-separated file into rows keyed by the header names.
///
/// The first record is the header; its names are trimmed, lower-normalized,
/// and must be non-empty. Blank lines are skipped. An empty or
/// whitespace-only field is the null-equivalent and becomes `None` rather
/// than an empty string. A record with fewer fields than the header yields a
/// subset row; a record with more fields is malformed.
#[derive(Debug, Clone)]
pub struct TsvSource {
    path: PathBuf,
}

impl TsvSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for TsvSource {
    fn load(&mut self) -> Result<Vec<Row>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_path(&self.path)?;

        let mut headers = Vec::new();
        for field in reader.headers()?.iter() {
            let name = field.trim();
            if name.is_empty() {
                return Err(LoadError::MalformedSource(
                    "empty column name in header".to_string(),
                ));
            }
            headers.push(name.to_lowercase());
        }
        if headers.is_empty() {
            return Err(LoadError::MalformedSource(
                "missing header row".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(LoadError::MalformedSource(format!(
                    "row {} has {} fields but the header defines {} columns",
                    idx + 1,
                    record.len(),
                    headers.len()
                )));
            }

            let mut row = Row::with_capacity(record.len());
            for (name, field) in headers.iter().zip(record.iter()) {
                row.insert(name.clone(), wrap_as_null(field));
            }
            rows.push(row);
        }

        debug!(
            "loaded {} rows from TSV source {}",
            rows.len(),
            self.path.display()
        );
        Ok(rows)
    }
}

/// `None` for empty or whitespace-only fields.
fn wrap_as_null(field: &str) -> Option<String> {
    if field.trim().is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}
