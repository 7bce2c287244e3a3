use async_trait::async_trait;
use parking_lot::RwLock;

use crate::engine::errors::StoreError;
use crate::engine::row::Row;
use crate::engine::store::table::Table;

/// In-memory `Table` used by the default binary and the tests. Rows are
/// kept in insertion order; point lookups require a configured key column
/// and resolve to the most recently written match (put-replaces-put).
pub struct MemoryTable {
    name: String,
    key_column: Option<String>,
    rows: RwLock<Vec<Row>>,
}

impl MemoryTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_column: None,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn with_key_column(name: impl Into<String>, key_column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_column: Some(key_column.into()),
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl Table for MemoryTable {
    async fn scan(&self) -> Result<Vec<Row>, StoreError> {
        Ok(self.rows.read().clone())
    }

    async fn put(&self, row: Row) -> Result<(), StoreError> {
        self.rows.write().push(row);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Row>, StoreError> {
        let Some(key_column) = &self.key_column else {
            return Err(StoreError::NoKeyColumn);
        };

        let rows = self.rows.read();
        // Last write wins, matching put-replaces-put stores.
        Ok(rows
            .iter()
            .rev()
            .find(|row| row.field(key_column).as_str() == Some(key))
            .cloned())
    }
}
