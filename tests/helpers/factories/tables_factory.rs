use std::sync::Arc;

use crate::engine::store::{MemoryTable, Table, Tables};

/// Builds a `Tables` bundle backed by fresh in-memory tables; individual
/// tables can be swapped for fakes.
pub struct TablesFactory {
    emergency: Arc<dyn Table>,
    notifications: Arc<dyn Table>,
    movement: Arc<dyn Table>,
    analytics: Arc<dyn Table>,
    analytics_key_column: String,
}

impl TablesFactory {
    pub fn new() -> Self {
        Self {
            emergency: Arc::new(MemoryTable::new("emergency_events")),
            notifications: Arc::new(MemoryTable::new("notifications")),
            movement: Arc::new(MemoryTable::new("current_position")),
            analytics: Arc::new(MemoryTable::with_key_column("analytics_results", "pKey")),
            analytics_key_column: "pKey".into(),
        }
    }

    pub fn with_emergency(mut self, table: Arc<dyn Table>) -> Self {
        self.emergency = table;
        self
    }

    pub fn with_notifications(mut self, table: Arc<dyn Table>) -> Self {
        self.notifications = table;
        self
    }

    pub fn with_movement(mut self, table: Arc<dyn Table>) -> Self {
        self.movement = table;
        self
    }

    pub fn with_analytics(mut self, table: Arc<dyn Table>) -> Self {
        self.analytics = table;
        self
    }

    pub fn create(self) -> Tables {
        Tables {
            emergency: self.emergency,
            notifications: self.notifications,
            movement: self.movement,
            analytics: self.analytics,
            analytics_key_column: self.analytics_key_column,
        }
    }
}
