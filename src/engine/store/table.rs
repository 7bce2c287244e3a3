use async_trait::async_trait;
use std::sync::Arc;

use crate::engine::errors::StoreError;
use crate::engine::row::Row;

/// Persistence seam: a key/value table supporting a full unordered scan,
/// write-one, and point lookup by key column. Implementations own their
/// concurrent-access safety; the core holds no locks across calls.
#[async_trait]
pub trait Table: Send + Sync {
    /// Full-table scan. Row order is unspecified and must not be relied
    /// upon by callers.
    async fn scan(&self) -> Result<Vec<Row>, StoreError>;

    async fn put(&self, row: Row) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<Row>, StoreError>;
}

/// The tables a request pipeline may touch, injected once at startup.
pub struct Tables {
    pub emergency: Arc<dyn Table>,
    pub notifications: Arc<dyn Table>,
    pub movement: Arc<dyn Table>,
    pub analytics: Arc<dyn Table>,
    /// Column holding the composite key in the analytics table.
    pub analytics_key_column: String,
}
