use hyper::Method;
use indoc::indoc;
use serde_json::json;

use crate::command::dispatcher::dispatch_request;
use crate::frontend::http::router::route;
use crate::shared::response::{Response, StatusCode};
use crate::test_helpers::factories::{RecordingFanout, TablesFactory};

async fn drive(
    method: Method,
    path: &str,
    body: &[u8],
    tables: &crate::engine::store::Tables,
    fanout: &RecordingFanout,
) -> Response {
    match route(&method, path, body) {
        Ok(request) => dispatch_request(request, tables, fanout).await,
        Err(rejection) => rejection,
    }
}

#[tokio::test]
async fn test_emergency_update_round_trip() {
    use crate::logging::init_for_tests;
    init_for_tests();

    let tables = TablesFactory::new().create();
    let fanout = RecordingFanout::new();

    // Post one emergency update...
    let body = indoc! {br#"
        {
            "uuid": "Test-UUID",
            "eventId": 99,
            "regionIds": [1, 2],
            "occurredAt": 123456,
            "dealtWith": false
        }
    "#};
    let response = drive(Method::POST, "/emergency-update", body, &tables, &fanout).await;

    assert_eq!(response.status, StatusCode::Ok);
    let echoed = response.body.unwrap();
    assert_eq!(echoed["uuid"], json!("Test-UUID"));
    assert_eq!(echoed["eventId"], json!(99));
    assert_eq!(echoed["regionIds"], json!([1, 2]));
    assert_eq!(echoed["occurredAt"], json!(123456));
    assert_eq!(echoed["dealtWith"], json!(false));
    assert!(echoed.get("position").is_none());

    // ...then poll it back from the start of time.
    let response = drive(Method::GET, "/live/emergency/99/0", b"", &tables, &fanout).await;

    assert_eq!(response.status, StatusCode::Ok);
    let records = response.body.unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], echoed);
}

#[tokio::test]
async fn test_notification_round_trip_carries_a_derived_id() {
    let tables = TablesFactory::new().create();
    let fanout = RecordingFanout::new().with_confirmation("pub-xyz");

    let body = indoc! {br#"
        {
            "title": "Gate change",
            "description": "Main stage moved to gate 4",
            "regionIds": [5],
            "occurredAt": 123456
        }
    "#};
    let posted = drive(
        Method::POST,
        "/events/7/notifications",
        body,
        &tables,
        &fanout,
    )
    .await;
    let posted_id = posted.body.unwrap()["notificationId"].clone();
    assert_ne!(posted_id, json!(0));

    let feed = drive(
        Method::GET,
        "/events/7/notifications",
        b"",
        &tables,
        &fanout,
    )
    .await;
    let records = feed.body.unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    // Retried reads report the same id the write reported.
    assert_eq!(records[0]["notificationId"], posted_id);
}

#[tokio::test]
async fn test_movement_updates_feed_the_heatmap() {
    let tables = TablesFactory::new().create();
    let fanout = RecordingFanout::new();

    let body = indoc! {br#"
        [
            {"uuid": "123e4567-e89b-12d3-a456-426614174000", "eventId": 3, "regionId": 5, "entering": true, "occurredAt": 100},
            {"uuid": "123e4567-e89b-12d3-a456-426614174000", "eventId": 3, "regionId": 5, "entering": true, "occurredAt": 200},
            {"uuid": "123e4567-e89b-12d3-a456-426614174000", "eventId": 3, "regionId": 6, "entering": false, "occurredAt": 300}
        ]
    "#};
    let response = drive(Method::POST, "/bulkUpdate", body, &tables, &fanout).await;
    assert_eq!(response.status, StatusCode::Ok);

    let response = drive(Method::GET, "/live/heatmap/3/0", b"", &tables, &fanout).await;
    assert_eq!(response.body, Some(json!({ "5": 2, "6": 1 })));
}

#[tokio::test]
async fn test_health_check() {
    let tables = TablesFactory::new().create();
    let fanout = RecordingFanout::new();

    let response = drive(Method::GET, "/api/health", b"", &tables, &fanout).await;
    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.body.is_none());
}
