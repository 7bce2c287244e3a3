use std::sync::Arc;

use crate::engine::fanout::{BroadcastHub, Fanout};
use crate::engine::store::{MemoryTable, Table, Tables};
use crate::frontend::server_state::ServerState;
use crate::shared::config::CONFIG;

/// Everything a request pipeline needs, built once at startup and shared
/// by reference. Collaborators are injected here instead of living in
/// globals so tests can swap them without touching shared state.
#[derive(Clone)]
pub struct FrontendContext {
    pub tables: Arc<Tables>,
    pub hub: Arc<BroadcastHub>,
    pub fanout: Arc<dyn Fanout>,
    pub server_state: Arc<ServerState>,
}

impl FrontendContext {
    pub fn from_config() -> Arc<Self> {
        let store = &CONFIG.store;

        let emergency: Arc<dyn Table> = Arc::new(MemoryTable::new(&store.emergency_table));
        let notifications: Arc<dyn Table> = Arc::new(MemoryTable::new(&store.notifications_table));
        let movement: Arc<dyn Table> = Arc::new(MemoryTable::new(&store.movement_table));
        let analytics: Arc<dyn Table> = Arc::new(MemoryTable::with_key_column(
            &store.analytics_table,
            &store.analytics_key_column,
        ));

        let tables = Arc::new(Tables {
            emergency,
            notifications,
            movement,
            analytics,
            analytics_key_column: store.analytics_key_column.clone(),
        });

        let hub = Arc::new(BroadcastHub::new(CONFIG.fanout.channel_capacity));
        let fanout: Arc<dyn Fanout> = hub.clone();

        Arc::new(Self {
            tables,
            hub,
            fanout,
            server_state: Arc::new(ServerState::new()),
        })
    }
}
