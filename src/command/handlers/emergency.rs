use serde_json::json;
use tracing::{debug, info, warn};

use crate::engine::fanout::Fanout;
use crate::engine::store::{Table, Tables};
use crate::engine::update::{decode_emergency_rows, encode, validate};
use crate::engine::update::EmergencyUpdate;
use crate::engine::window::filter_window;
use crate::shared::response::{Response, StatusCode};

/// Name broadcast on the event channel for urgent updates.
const EMERGENCY_EVENT: &str = "emergency-update";

/// Handle `POST /emergency-update`: validate, persist, fan out, echo.
///
/// Persistence and fan-out run only after full acceptance, and neither may
/// fail the response: the record is logically accepted once validated.
pub async fn handle_update(
    update: EmergencyUpdate,
    tables: &Tables,
    fanout: &dyn Fanout,
) -> Response {
    if let Err(e) = validate::validate_emergency(&update) {
        warn!(target: "pulsefeed::emergency", error = %e, "Rejected emergency update");
        return Response::error(StatusCode::BadRequest, e);
    }

    if let Err(e) = tables.emergency.put(encode::emergency_row(&update)).await {
        warn!(target: "pulsefeed::emergency", error = %e, "Failed to persist emergency update");
    }

    match serde_json::to_vec(&update) {
        Ok(payload) => {
            let channel = update.event_id.to_string();
            if let Err(e) = fanout
                .broadcast(&channel, EMERGENCY_EVENT, &payload)
                .await
            {
                warn!(target: "pulsefeed::emergency", error = %e, "Failed to broadcast emergency update");
            }
        }
        Err(e) => {
            warn!(target: "pulsefeed::emergency", error = %e, "Failed to encode emergency update for broadcast");
        }
    }

    info!(
        target: "pulsefeed::emergency",
        event_id = update.event_id,
        "Emergency update accepted"
    );
    Response::ok(json!(update))
}

/// Handle `GET /live/emergency/{eventId}/{lastPoll}`: scan, decode, filter.
/// Records come back in stored order; a failed scan degrades to `[]`.
pub async fn handle_feed(event_id: i64, watermark: i64, tables: &Tables) -> Response {
    let rows = match tables.emergency.scan().await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(target: "pulsefeed::emergency", error = %e, "Emergency scan failed");
            Vec::new()
        }
    };

    let decoded = decode_emergency_rows(&rows);
    if decoded.skipped > 0 {
        debug!(
            target: "pulsefeed::emergency",
            skipped = decoded.skipped,
            "Skipped malformed emergency rows"
        );
    }

    let mut records = decoded.records;
    filter_window(&mut records, event_id, watermark);

    Response::ok(json!(records))
}
