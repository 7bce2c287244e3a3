use std::collections::HashMap;

use crate::engine::row::{Row, RowValue};
use crate::engine::update::types::{EmergencyUpdate, MovementRecord, OrganiserNotification};

/// Encoders mirror the decoders in `decode.rs`: integers are tagged `Int`,
/// fractional coordinates are text-encoded base-10 the way the store
/// returns them.
pub fn emergency_row(update: &EmergencyUpdate) -> Row {
    let mut row = Row::new();
    row.insert("uuid", RowValue::Str(update.uuid.clone()));
    row.insert("eventId", RowValue::Int(update.event_id));
    row.insert(
        "regionIds",
        RowValue::List(update.region_ids.iter().map(|id| RowValue::Int(*id)).collect()),
    );
    row.insert("occurredAt", RowValue::Int(update.occurred_at));
    row.insert("dealtWith", RowValue::Bool(update.dealt_with));
    row.insert("description", RowValue::Str(update.description.clone()));
    if let Some(position) = &update.position {
        let mut fields = HashMap::new();
        fields.insert("lat".to_string(), RowValue::Str(position.lat.to_string()));
        fields.insert("lng".to_string(), RowValue::Str(position.lng.to_string()));
        row.insert("position", RowValue::Map(fields));
    }
    row
}

pub fn notification_row(notification: &OrganiserNotification) -> Row {
    let mut row = Row::new();
    row.insert("title", RowValue::Str(notification.title.clone()));
    row.insert(
        "description",
        RowValue::Str(notification.description.clone()),
    );
    row.insert(
        "regionIds",
        RowValue::List(
            notification
                .region_ids
                .iter()
                .map(|id| RowValue::Int(*id))
                .collect(),
        ),
    );
    row.insert("occurredAt", RowValue::Int(notification.occurred_at));
    row.insert(
        "notificationId",
        RowValue::Int(i64::from(notification.notification_id)),
    );
    row.insert("eventId", RowValue::Int(notification.event_id));
    row
}

pub fn movement_row(record: &MovementRecord) -> Row {
    let mut row = Row::new();
    row.insert("uuid", RowValue::Str(record.uuid.clone()));
    row.insert("eventId", RowValue::Int(record.event_id));
    if let Some(region_id) = record.region_id {
        row.insert("regionId", RowValue::Int(region_id));
    }
    row.insert("entering", RowValue::Bool(record.entering));
    row.insert("occurredAt", RowValue::Int(record.occurred_at));
    row
}
