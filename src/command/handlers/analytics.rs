use serde_json::json;
use tracing::warn;

use crate::engine::store::{Table, Tables};
use crate::shared::response::{Response, StatusCode};

/// Handle `GET /events/{eventId}/tasks/{taskId}`: point lookup of a
/// precomputed analytics result by its composite key. This is the one read
/// path that surfaces a store failure as a 500 instead of degrading.
pub async fn handle(event_id: i64, task_id: i64, tables: &Tables) -> Response {
    let key = format!("{event_id}-{task_id}");

    let row = match tables.analytics.get(&key).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            return Response::error(
                StatusCode::NotFound,
                format!("No result for task {task_id} of event {event_id}"),
            );
        }
        Err(e) => {
            warn!(target: "pulsefeed::analytics", error = %e, key, "Analytics lookup failed");
            return Response::error(StatusCode::InternalError, "Analytics store unavailable");
        }
    };

    // Swap the raw composite key for the ids the caller asked with.
    let mut body = row.to_json();
    if let Some(obj) = body.as_object_mut() {
        obj.remove(&tables.analytics_key_column);
        obj.insert("eventId".to_string(), json!(event_id));
        obj.insert("taskId".to_string(), json!(task_id));
    }

    Response::ok(body)
}
