use serde_json::json;
use tracing::{debug, warn};

use crate::engine::aggregate::count_regions;
use crate::engine::store::{Table, Tables};
use crate::engine::update::decode_movement_rows;
use crate::engine::window::filter_window;
use crate::shared::response::Response;

/// Handle `GET /live/heatmap/{eventId}/{lastPoll}`: region occupancy
/// counts over the movement records inside the poll window.
pub async fn handle(event_id: i64, watermark: i64, tables: &Tables) -> Response {
    let rows = match tables.movement.scan().await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(target: "pulsefeed::heatmap", error = %e, "Movement scan failed");
            Vec::new()
        }
    };

    let decoded = decode_movement_rows(&rows);
    if decoded.skipped > 0 {
        debug!(
            target: "pulsefeed::heatmap",
            skipped = decoded.skipped,
            "Skipped malformed movement rows"
        );
    }

    let mut records = decoded.records;
    filter_window(&mut records, event_id, watermark);

    Response::ok(json!(count_regions(&records)))
}
