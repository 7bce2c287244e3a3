use crate::command::types::ApiRequest;
use crate::engine::update::{EmergencyUpdate, MovementUpdate, OrganiserNotification};
use crate::shared::response::{Response, StatusCode};

/// Decode method + path + body into a typed request, or a ready-made error
/// response. Malformed JSON and unparseable path params reject with 400
/// before any validation runs.
pub fn route(method: &hyper::Method, path: &str, body: &[u8]) -> Result<ApiRequest, Response> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        (&hyper::Method::POST, ["emergency-update"]) => {
            let update: EmergencyUpdate = decode_body(body, "emergency update")?;
            Ok(ApiRequest::EmergencyUpdate(update))
        }
        (&hyper::Method::GET, ["live", "emergency", event_id, last_poll]) => {
            Ok(ApiRequest::EmergencyFeed {
                event_id: parse_arg(event_id, "eventId")?,
                watermark: parse_arg(last_poll, "lastPoll")?,
            })
        }
        (&hyper::Method::GET, ["live", "heatmap", event_id, last_poll]) => {
            Ok(ApiRequest::Heatmap {
                event_id: parse_arg(event_id, "eventId")?,
                watermark: parse_arg(last_poll, "lastPoll")?,
            })
        }
        (&hyper::Method::POST, ["events", event_id, "notifications"]) => {
            let notification: OrganiserNotification =
                decode_body(body, "organiser notification")?;
            Ok(ApiRequest::PostNotification {
                event_id: parse_arg(event_id, "eventId")?,
                notification,
            })
        }
        (&hyper::Method::GET, ["events", event_id, "notifications"]) => {
            Ok(ApiRequest::NotificationFeed {
                event_id: parse_arg(event_id, "eventId")?,
            })
        }
        (&hyper::Method::GET, ["events", event_id, "tasks", task_id]) => {
            Ok(ApiRequest::TaskResult {
                event_id: parse_arg(event_id, "eventId")?,
                task_id: parse_arg(task_id, "taskId")?,
            })
        }
        (&hyper::Method::POST, ["update"]) => {
            let update: MovementUpdate = decode_body(body, "movement update")?;
            Ok(ApiRequest::MovementUpdate(update))
        }
        (&hyper::Method::POST, ["bulkUpdate"]) => {
            let updates: Vec<MovementUpdate> = decode_body(body, "movement updates")?;
            Ok(ApiRequest::BulkMovementUpdate(updates))
        }
        (&hyper::Method::GET, ["api", "health"]) => Ok(ApiRequest::Health),
        // Known paths hit with the wrong method get a 405, everything else 404.
        (_, ["emergency-update"])
        | (_, ["update"])
        | (_, ["bulkUpdate"])
        | (_, ["api", "health"])
        | (_, ["live", "emergency", _, _])
        | (_, ["live", "heatmap", _, _])
        | (_, ["events", _, "notifications"])
        | (_, ["events", _, "tasks", _]) => Err(Response::error(
            StatusCode::MethodNotAllowed,
            "Method Not Allowed",
        )),
        _ => Err(Response::error(StatusCode::NotFound, "Not Found")),
    }
}

fn decode_body<T: serde::de::DeserializeOwned>(
    body: &[u8],
    what: &str,
) -> Result<T, Response> {
    serde_json::from_slice(body).map_err(|e| {
        Response::error(
            StatusCode::BadRequest,
            format!("Failed to decode {what}: {e}"),
        )
    })
}

fn parse_arg(raw: &str, name: &str) -> Result<i64, Response> {
    raw.parse::<i64>().map_err(|e| {
        Response::error(
            StatusCode::BadRequest,
            format!("Failed to decode request {name}: {e}"),
        )
    })
}
