pub mod hub;
pub mod identity;
pub mod transport;


pub use hub::{BroadcastHub, HubFrame};
pub use identity::derive_notification_id;
pub use transport::Fanout;
