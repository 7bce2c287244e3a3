use serde_json::json;
use tracing::{debug, info, warn};

use crate::engine::aggregate::order_newest_first;
use crate::engine::fanout::{Fanout, derive_notification_id};
use crate::engine::store::{Table, Tables};
use crate::engine::update::OrganiserNotification;
use crate::engine::update::{decode_notification_rows, encode, validate};
use crate::engine::window::filter_window;
use crate::shared::response::{Response, StatusCode};

const NOTIFICATION_EVENT: &str = "organiser-notification";

/// Handle `POST /events/{eventId}/notifications`.
///
/// The notification id is derived from the transport's publish
/// confirmation, never from record content; a failed publish leaves it at
/// the zero value and the notification is still persisted and echoed.
pub async fn handle_post(
    event_id: i64,
    mut notification: OrganiserNotification,
    tables: &Tables,
    fanout: &dyn Fanout,
) -> Response {
    if let Err(e) = validate::validate_notification(&notification) {
        warn!(target: "pulsefeed::notifications", error = %e, "Rejected organiser notification");
        return Response::error(StatusCode::BadRequest, e);
    }

    // The event id comes from the path, not the body.
    notification.event_id = event_id;

    let targets: Vec<String> = notification
        .region_ids
        .iter()
        .map(|id| id.to_string())
        .collect();

    match fanout
        .publish(&targets, &notification.title, &notification.description)
        .await
    {
        Ok(confirmation) => {
            notification.notification_id = derive_notification_id(&confirmation);
        }
        Err(e) => {
            warn!(target: "pulsefeed::notifications", error = %e, "Publish failed");
        }
    }

    if let Err(e) = tables
        .notifications
        .put(encode::notification_row(&notification))
        .await
    {
        warn!(target: "pulsefeed::notifications", error = %e, "Failed to persist notification");
    }

    match serde_json::to_vec(&notification) {
        Ok(payload) => {
            let channel = event_id.to_string();
            if let Err(e) = fanout
                .broadcast(&channel, NOTIFICATION_EVENT, &payload)
                .await
            {
                warn!(target: "pulsefeed::notifications", error = %e, "Failed to broadcast notification");
            }
        }
        Err(e) => {
            warn!(target: "pulsefeed::notifications", error = %e, "Failed to encode notification for broadcast");
        }
    }

    info!(
        target: "pulsefeed::notifications",
        event_id,
        notification_id = notification.notification_id,
        "Notification accepted"
    );
    Response::ok(json!(notification))
}

/// Handle `GET /events/{eventId}/notifications`: the full feed for an
/// event, most recent first. No watermark in this route; 0 means all.
pub async fn handle_feed(event_id: i64, tables: &Tables) -> Response {
    let rows = match tables.notifications.scan().await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(target: "pulsefeed::notifications", error = %e, "Notification scan failed");
            Vec::new()
        }
    };

    let decoded = decode_notification_rows(&rows);
    if decoded.skipped > 0 {
        debug!(
            target: "pulsefeed::notifications",
            skipped = decoded.skipped,
            "Skipped malformed notification rows"
        );
    }

    let mut records = decoded.records;
    filter_window(&mut records, event_id, 0);
    order_newest_first(&mut records);

    Response::ok(json!(records))
}
