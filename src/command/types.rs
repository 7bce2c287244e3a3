use crate::engine::update::{EmergencyUpdate, MovementUpdate, OrganiserNotification};

/// One routed API request, decoded from method + path + body by the HTTP
/// frontend. Read requests carry the event id and watermark extracted from
/// the path; write requests carry the typed update body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    EmergencyUpdate(EmergencyUpdate),
    EmergencyFeed {
        event_id: i64,
        watermark: i64,
    },
    PostNotification {
        event_id: i64,
        notification: OrganiserNotification,
    },
    NotificationFeed {
        event_id: i64,
    },
    MovementUpdate(MovementUpdate),
    BulkMovementUpdate(Vec<MovementUpdate>),
    Heatmap {
        event_id: i64,
        watermark: i64,
    },
    TaskResult {
        event_id: i64,
        task_id: i64,
    },
    Health,
}
