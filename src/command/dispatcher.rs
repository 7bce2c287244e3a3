use crate::command::handlers;
use crate::command::types::ApiRequest;
use crate::engine::fanout::Fanout;
use crate::engine::store::Tables;
use crate::shared::response::Response;

/// Route a decoded request to its handler. Every pipeline is request-scoped:
/// the only shared state is the injected collaborators.
pub async fn dispatch_request(
    request: ApiRequest,
    tables: &Tables,
    fanout: &dyn Fanout,
) -> Response {
    match request {
        ApiRequest::EmergencyUpdate(update) => {
            handlers::emergency::handle_update(update, tables, fanout).await
        }
        ApiRequest::EmergencyFeed {
            event_id,
            watermark,
        } => handlers::emergency::handle_feed(event_id, watermark, tables).await,
        ApiRequest::PostNotification {
            event_id,
            notification,
        } => handlers::notifications::handle_post(event_id, notification, tables, fanout).await,
        ApiRequest::NotificationFeed { event_id } => {
            handlers::notifications::handle_feed(event_id, tables).await
        }
        ApiRequest::MovementUpdate(update) => {
            handlers::movement::handle_update(update, tables).await
        }
        ApiRequest::BulkMovementUpdate(updates) => {
            handlers::movement::handle_bulk(updates, tables).await
        }
        ApiRequest::Heatmap {
            event_id,
            watermark,
        } => handlers::heatmap::handle(event_id, watermark, tables).await,
        ApiRequest::TaskResult { event_id, task_id } => {
            handlers::analytics::handle(event_id, task_id, tables).await
        }
        ApiRequest::Health => Response::ok_empty(),
    }
}
