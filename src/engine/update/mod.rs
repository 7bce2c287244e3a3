pub mod decode;
pub mod encode;
pub mod types;
pub mod validate;


pub use decode::{Decoded, decode_emergency_rows, decode_movement_rows, decode_notification_rows};
pub use types::{
    EmergencyUpdate, MovementRecord, MovementUpdate, OrganiserNotification, Position, UpdateRecord,
};
