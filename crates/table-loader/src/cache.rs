//! Table schema discovery and caching.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::core::schema::TableDef;
use crate::core::traits::DatabaseClient;
use crate::error::{LoadError, Result};

/// Process-wide cache of discovered table schemas.
///
/// The cache is explicitly constructed and shared by reference (or inside an
/// `Arc`) - there is no global instance. It is intended to be reused across
/// many connections and many insert calls, including concurrently: entries
/// are appended on first resolution and never mutated or evicted afterwards,
/// so a schema change in the database after first resolution is not observed
/// until [`SchemaCache::reset`].
///
/// Entries are keyed by the case-insensitive `(qualifier, table)` pair, so
/// same-named tables under different qualifiers get distinct entries.
#[derive(Debug, Default)]
pub struct SchemaCache {
    tables: RwLock<Vec<Arc<TableDef>>>,
}

impl SchemaCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find or load the definition of `table` under `qualifier`.
    ///
    /// Cache hits proceed under the read lock without contention. On a miss
    /// the write lock serializes the re-check, the single catalog query, and
    /// the append, so concurrent resolution of a never-before-seen table
    /// yields one entry and one catalog query.
    ///
    /// # Errors
    ///
    /// Propagates the client's schema errors unchanged; a catalog response
    /// with zero columns is a schema error naming the table.
    pub async fn resolve<C>(
        &self,
        client: &C,
        qualifier: &str,
        table: &str,
    ) -> Result<Arc<TableDef>>
    where
        C: DatabaseClient + ?Sized,
    {
        {
            let tables = self.tables.read().await;
            if let Some(def) = tables.iter().find(|d| d.matches(qualifier, table)) {
                debug!("schema cache hit for table '{}'", def.full_name());
                return Ok(Arc::clone(def));
            }
        }

        let mut tables = self.tables.write().await;

        // Re-check: another task may have populated the entry while we
        // waited for the write lock.
        if let Some(def) = tables.iter().find(|d| d.matches(qualifier, table)) {
            return Ok(Arc::clone(def));
        }

        let columns = client.fetch_columns(qualifier, table).await?;
        if columns.is_empty() {
            return Err(LoadError::schema(table, "catalog reported no columns"));
        }

        let def = Arc::new(TableDef::new(qualifier, table, columns));
        info!(
            "cached schema for table '{}' ({} columns)",
            def.full_name(),
            def.columns.len()
        );
        tables.push(Arc::clone(&def));

        Ok(def)
    }

    /// Number of cached table definitions.
    pub async fn len(&self) -> usize {
        self.tables.read().await.len()
    }

    /// Check if the cache holds no definitions.
    pub async fn is_empty(&self) -> bool {
        self.tables.read().await.is_empty()
    }

    /// Drop all cached definitions.
    ///
    /// The only invalidation path; subsequent resolutions query the catalog
    /// again.
    pub async fn reset(&self) {
        self.tables.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::core::schema::Column;
    use crate::core::value::SqlValue;

    struct MockClient {
        columns: Vec<Column>,
        catalog_queries: AtomicUsize,
        fail_catalog: bool,
    }

    impl MockClient {
        fn new(columns: Vec<Column>) -> Self {
            Self {
                columns,
                catalog_queries: AtomicUsize::new(0),
                fail_catalog: false,
            }
        }

        fn queries(&self) -> usize {
            self.catalog_queries.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DatabaseClient for MockClient {
        async fn fetch_columns(&self, _qualifier: &str, table: &str) -> Result<Vec<Column>> {
            self.catalog_queries.fetch_add(1, Ordering::SeqCst);
            if self.fail_catalog {
                return Err(LoadError::schema(table, "connection refused"));
            }
            Ok(self.columns.clone())
        }

        async fn execute(&self, _sql: &str, _params: &[SqlValue]) -> Result<u64> {
            Ok(0)
        }
    }

    fn make_test_columns() -> Vec<Column> {
        vec![
            Column {
                name: "ID".to_string(),
                type_name: "BIGINT".to_string(),
                type_code: -5,
                size: 19,
            },
            Column {
                name: "Column1".to_string(),
                type_name: "VARCHAR".to_string(),
                type_code: 12,
                size: 32,
            },
        ]
    }

    #[tokio::test]
    async fn test_resolve_populates_and_caches() {
        let client = MockClient::new(make_test_columns());
        let cache = SchemaCache::new();

        let def = cache.resolve(&client, "", "TEST_SCHEMA").await.unwrap();
        assert_eq!(def.name, "TEST_SCHEMA");
        assert_eq!(def.columns.len(), 2);
        assert_eq!(def.columns[0].name, "ID");
        assert_eq!(def.columns[0].type_code, -5);
        assert_eq!(client.queries(), 1);

        // Second resolution is idempotent and issues no catalog query.
        let again = cache.resolve(&client, "", "TEST_SCHEMA").await.unwrap();
        assert!(Arc::ptr_eq(&def, &again));
        assert_eq!(client.queries(), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let client = MockClient::new(make_test_columns());
        let cache = SchemaCache::new();

        let def = cache.resolve(&client, "T", "Foo").await.unwrap();
        let again = cache.resolve(&client, "t", "FOO").await.unwrap();
        assert!(Arc::ptr_eq(&def, &again));
        assert_eq!(client.queries(), 1);
    }

    #[tokio::test]
    async fn test_qualifier_is_part_of_the_key() {
        let client = MockClient::new(make_test_columns());
        let cache = SchemaCache::new();

        let a = cache.resolve(&client, "sales", "Orders").await.unwrap();
        let b = cache.resolve(&client, "archive", "Orders").await.unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(client.queries(), 2);
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_concurrent_misses_produce_one_entry() {
        let client = MockClient::new(make_test_columns());
        let cache = SchemaCache::new();

        let (a, b) = tokio::join!(
            cache.resolve(&client, "", "TEST_SCHEMA"),
            cache.resolve(&client, "", "TEST_SCHEMA"),
        );
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(client.queries(), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_catalog_response_is_schema_error() {
        let client = MockClient::new(vec![]);
        let cache = SchemaCache::new();

        let err = cache.resolve(&client, "", "MISSING").await.unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. }));
        assert!(err.to_string().contains("MISSING"));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_catalog_failure_propagates_unchanged() {
        let mut client = MockClient::new(make_test_columns());
        client.fail_catalog = true;
        let cache = SchemaCache::new();

        let err = cache.resolve(&client, "", "TEST_SCHEMA").await.unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. }));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_reset_forces_rediscovery() {
        let client = MockClient::new(make_test_columns());
        let cache = SchemaCache::new();

        cache.resolve(&client, "", "TEST_SCHEMA").await.unwrap();
        cache.reset().await;
        assert!(cache.is_empty().await);

        cache.resolve(&client, "", "TEST_SCHEMA").await.unwrap();
        assert_eq!(client.queries(), 2);
    }
}
