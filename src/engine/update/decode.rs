use tracing::debug;

use crate::engine::row::{Row, RowValue};
use crate::engine::update::types::{
    EmergencyUpdate, MovementRecord, OrganiserNotification, Position,
};

/// Result of decoding one scan batch. Skipped rows are counted for the
/// logs but never surfaced to the HTTP caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Integer read that tolerates text-encoded numerics: the store returns
/// numbers either tagged `Int` or as base-10 strings.
fn int_value(value: &RowValue) -> Option<i64> {
    match value {
        RowValue::Int(v) => Some(*v),
        RowValue::Str(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}

fn float_value(value: &RowValue) -> Option<f64> {
    match value {
        RowValue::Int(v) => Some(*v as f64),
        RowValue::Str(s) => s.parse::<f64>().ok(),
        _ => None,
    }
}

fn int_field(row: &Row, name: &str) -> Option<i64> {
    int_value(row.field(name))
}

fn str_field(row: &Row, name: &str) -> Option<String> {
    row.field(name).as_str().map(str::to_owned)
}

fn bool_field(row: &Row, name: &str) -> Option<bool> {
    row.field(name).as_bool()
}

/// Element-wise list decode: a bad element drops that element only,
/// never the whole record.
fn int_list_field(row: &Row, name: &str) -> Vec<i64> {
    row.field(name)
        .as_list()
        .map(|items| items.iter().filter_map(int_value).collect())
        .unwrap_or_default()
}

fn position_field(row: &Row) -> Option<Position> {
    let fields = row.field("position").as_map()?;
    let lat = float_value(fields.get("lat")?)?;
    let lng = float_value(fields.get("lng")?)?;
    Some(Position { lat, lng })
}

/// Decode emergency rows from a table scan. Rows missing a required field
/// (`uuid`, `eventId`, `occurredAt`) are skipped, not fatal: partially
/// written or legacy rows must never block a read response.
pub fn decode_emergency_rows(rows: &[Row]) -> Decoded<EmergencyUpdate> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for row in rows {
        let (Some(uuid), Some(event_id), Some(occurred_at)) = (
            str_field(row, "uuid"),
            int_field(row, "eventId"),
            int_field(row, "occurredAt"),
        ) else {
            skipped += 1;
            debug!(target: "pulsefeed::decode", "Skipping malformed emergency row");
            continue;
        };

        records.push(EmergencyUpdate {
            uuid,
            event_id,
            region_ids: int_list_field(row, "regionIds"),
            occurred_at,
            dealt_with: bool_field(row, "dealtWith").unwrap_or(false),
            description: str_field(row, "description").unwrap_or_default(),
            position: position_field(row),
        });
    }

    Decoded { records, skipped }
}

/// Decode organiser notification rows. The identity string here is the
/// title; `notificationId` defaults to the zero value for rows persisted
/// before fan-out confirmed.
pub fn decode_notification_rows(rows: &[Row]) -> Decoded<OrganiserNotification> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for row in rows {
        let (Some(title), Some(event_id), Some(occurred_at)) = (
            str_field(row, "title"),
            int_field(row, "eventId"),
            int_field(row, "occurredAt"),
        ) else {
            skipped += 1;
            debug!(target: "pulsefeed::decode", "Skipping malformed notification row");
            continue;
        };

        records.push(OrganiserNotification {
            title,
            description: str_field(row, "description").unwrap_or_default(),
            region_ids: int_list_field(row, "regionIds"),
            occurred_at,
            notification_id: int_field(row, "notificationId").unwrap_or(0) as i32,
            event_id,
        });
    }

    Decoded { records, skipped }
}

/// Decode movement rows backing the heatmap.
pub fn decode_movement_rows(rows: &[Row]) -> Decoded<MovementRecord> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for row in rows {
        let (Some(uuid), Some(event_id), Some(occurred_at)) = (
            str_field(row, "uuid"),
            int_field(row, "eventId"),
            int_field(row, "occurredAt"),
        ) else {
            skipped += 1;
            debug!(target: "pulsefeed::decode", "Skipping malformed movement row");
            continue;
        };

        records.push(MovementRecord {
            uuid,
            event_id,
            region_id: int_field(row, "regionId"),
            entering: bool_field(row, "entering").unwrap_or(false),
            occurred_at,
        });
    }

    Decoded { records, skipped }
}
