use async_trait::async_trait;
use parking_lot::Mutex;

use crate::engine::errors::{FanoutError, StoreError};
use crate::engine::fanout::Fanout;
use crate::engine::row::Row;
use crate::engine::store::Table;

/// Fan-out double that records every call. Replaces the original pattern
/// of swapping a package-level client variable: the fake is injected where
/// the real hub would be.
pub struct RecordingFanout {
    confirmation: String,
    fail_publish: bool,
    pub published: Mutex<Vec<(Vec<String>, String, String)>>,
    pub broadcasts: Mutex<Vec<(String, String, Vec<u8>)>>,
}

impl RecordingFanout {
    pub fn new() -> Self {
        Self {
            confirmation: "publish-confirmation-1".into(),
            fail_publish: false,
            published: Mutex::new(Vec::new()),
            broadcasts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_confirmation(mut self, confirmation: &str) -> Self {
        self.confirmation = confirmation.to_string();
        self
    }

    pub fn failing_publish(mut self) -> Self {
        self.fail_publish = true;
        self
    }

    pub fn published_count(&self) -> usize {
        self.published.lock().len()
    }

    pub fn broadcast_count(&self) -> usize {
        self.broadcasts.lock().len()
    }
}

#[async_trait]
impl Fanout for RecordingFanout {
    async fn publish(
        &self,
        targets: &[String],
        title: &str,
        body: &str,
    ) -> Result<String, FanoutError> {
        if self.fail_publish {
            return Err(FanoutError::Publish("transport unreachable".into()));
        }
        self.published
            .lock()
            .push((targets.to_vec(), title.to_string(), body.to_string()));
        Ok(self.confirmation.clone())
    }

    async fn broadcast(
        &self,
        channel: &str,
        event_name: &str,
        payload: &[u8],
    ) -> Result<(), FanoutError> {
        self.broadcasts
            .lock()
            .push((channel.to_string(), event_name.to_string(), payload.to_vec()));
        Ok(())
    }
}

/// Table double whose every operation fails, for degraded-read tests.
pub struct FailingTable;

#[async_trait]
impl Table for FailingTable {
    async fn scan(&self) -> Result<Vec<Row>, StoreError> {
        Err(StoreError::Unavailable("scan failed".into()))
    }

    async fn put(&self, _row: Row) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("put failed".into()))
    }

    async fn get(&self, _key: &str) -> Result<Option<Row>, StoreError> {
        Err(StoreError::Unavailable("get failed".into()))
    }
}
