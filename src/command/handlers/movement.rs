use tracing::{info, warn};

use crate::engine::store::{Table, Tables};
use crate::engine::update::MovementUpdate;
use crate::engine::update::{encode, validate};
use crate::shared::response::{Response, StatusCode};

/// Handle `POST /update`: validate, then persist fire-and-forget. A store
/// failure is logged and the update is still acknowledged.
pub async fn handle_update(update: MovementUpdate, tables: &Tables) -> Response {
    if let Err(e) = validate::validate_movement(&update) {
        warn!(target: "pulsefeed::movement", error = %e, "Rejected movement update");
        return Response::error(StatusCode::BadRequest, e);
    }

    let record = update.into_record();
    if let Err(e) = tables.movement.put(encode::movement_row(&record)).await {
        warn!(target: "pulsefeed::movement", error = %e, "Failed to persist movement update");
    }

    Response::ok_empty()
}

/// Handle `POST /bulkUpdate`: each update is validated before it is
/// persisted; the first invalid one rejects the request, leaving earlier
/// updates already written (corrections are new rows, never rollbacks).
pub async fn handle_bulk(updates: Vec<MovementUpdate>, tables: &Tables) -> Response {
    let total = updates.len();

    for update in updates {
        if let Err(e) = validate::validate_movement(&update) {
            warn!(target: "pulsefeed::movement", error = %e, "Rejected movement update in bulk");
            return Response::error(StatusCode::BadRequest, e);
        }

        let record = update.into_record();
        if let Err(e) = tables.movement.put(encode::movement_row(&record)).await {
            warn!(target: "pulsefeed::movement", error = %e, "Failed to persist bulk movement update");
        }
    }

    info!(target: "pulsefeed::movement", total, "Bulk movement updates accepted");
    Response::ok_empty()
}
