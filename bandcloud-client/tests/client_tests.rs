//! Accessor tests over an in-memory transport.

mod support;

use bandcloud_client::{ActivityKind, BandError, Device, Period, Profile};
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde_json::json;
use support::{BASE_URL, MockTransport, client_with};

#[tokio::test]
async fn test_profile_decodes() {
    let transport = MockTransport::new();
    transport.reply(200, r#"{"firstString":"Jane","lastName":"Doe","height":170}"#);
    let client = client_with(&transport);

    let profile = client.profile().await.unwrap();
    assert_eq!(profile.first_name, "Jane");
    assert_eq!(profile.last_name, "Doe");
    assert_eq!(profile.height, 170);

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(*sent[0].method(), Method::GET);
    assert_eq!(sent[0].url(), format!("{}/Profile", BASE_URL));
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_requests_carry_headers() {
    let transport = MockTransport::new();
    transport.reply(200, "{}");
    let client = client_with(&transport);

    client.devices().await.unwrap();

    let sent = transport.sent();
    let headers = sent[0].headers();
    assert_eq!(headers[AUTHORIZATION], "Bearer test-token");
    assert_eq!(headers[ACCEPT], "application/json");
    assert!(headers.contains_key(USER_AGENT));
    assert!(headers.get(CONTENT_TYPE).is_none());
}

#[tokio::test]
async fn test_missing_device_is_status_error() {
    let transport = MockTransport::new();
    transport.reply(404, r#"{"error":"not found"}"#);
    let client = client_with(&transport);

    let result = client.device("abc123").await;
    assert_eq!(transport.sent()[0].url(), format!("{}/Devices/abc123", BASE_URL));

    let err = result.as_ref().unwrap_err();
    assert!(matches!(err, BandError::HttpStatus { .. }));
    assert!(err.is_not_found());
    assert_eq!(result.unwrap_or_default(), Device::default());
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_malformed_summaries_is_decode_error() {
    let transport = MockTransport::new();
    transport.reply(200, r#"{"summaries": [{"stepsTaken": "#);
    let client = client_with(&transport);

    let result = client.period_summaries(Period::Daily).await;
    assert!(matches!(result, Err(BandError::Decode(_))));
    assert_eq!(transport.sent()[0].url(), format!("{}/Summaries/daily", BASE_URL));
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_hourly_summaries_path_and_paging() {
    let transport = MockTransport::new();
    transport.reply(
        200,
        r#"{
            "summaries": [{"stepsTaken": 120}, {"stepsTaken": 80}],
            "itemCount": 2,
            "nextPage": "https://api.example.com/v1/me/Summaries/hourly?page=2"
        }"#,
    );
    let client = client_with(&transport);

    let summaries = client.period_summaries(Period::Hourly).await.unwrap();
    assert_eq!(transport.sent()[0].url(), format!("{}/Summaries/hourly", BASE_URL));
    assert_eq!(summaries.item_count, 2);
    assert_eq!(summaries.total_steps(), 200);
    // The next page is exposed, not followed.
    assert!(summaries.has_next_page());
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn test_activities_listing() {
    let transport = MockTransport::new();
    transport.reply(
        200,
        r#"{
            "runActivities": [{"id": "run-1", "activityType": "Run"}],
            "sleepActivities": [{"id": "sleep-1"}],
            "itemCount": 2
        }"#,
    );
    let client = client_with(&transport);

    let activities = client.activities().await.unwrap();
    assert_eq!(transport.sent()[0].url(), format!("{}/Activities", BASE_URL));
    assert_eq!(activities.len(), 2);

    let all = activities.all();
    assert!(all.iter().any(|a| a.id == "run-1" && a.kind == ActivityKind::Run));
    assert!(all.iter().any(|a| a.id == "sleep-1" && a.kind == ActivityKind::Sleep));
}

#[tokio::test]
async fn test_single_activity() {
    let transport = MockTransport::new();
    transport.reply(200, r#"{"id": "bike-7", "activityType": "Bike"}"#);
    let client = client_with(&transport);

    let activity = client.activity("bike-7").await.unwrap();
    assert_eq!(transport.sent()[0].url(), format!("{}/Activities/bike-7", BASE_URL));
    assert_eq!(activity.kind, ActivityKind::Bike);
}

#[tokio::test]
async fn test_invalid_id_sends_nothing() {
    let transport = MockTransport::new();
    let client = client_with(&transport);

    let result = client.device("has space").await;
    assert!(matches!(result, Err(BandError::InvalidPath { .. })));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_generic_get() {
    let transport = MockTransport::new();
    transport.reply(200, r#"{"firstString":"Ann"}"#);
    let client = client_with(&transport);

    let profile: Profile = client.get("/Profile").await.unwrap();
    assert_eq!(profile.first_name, "Ann");
}

#[tokio::test]
async fn test_send_with_body() {
    let transport = MockTransport::new();
    transport.reply(201, r#"{"ok": true}"#);
    let client = client_with(&transport);

    let reply: serde_json::Value = client
        .send(Method::POST, "/Activities", Some(&json!({"name": "Lunch ride"})))
        .await
        .unwrap();
    assert_eq!(reply["ok"], true);

    let sent = transport.sent();
    assert_eq!(*sent[0].method(), Method::POST);
    assert_eq!(sent[0].headers()[CONTENT_TYPE], "application/json");
    let body: serde_json::Value = serde_json::from_slice(sent[0].body().unwrap()).unwrap();
    assert_eq!(body["name"], "Lunch ride");
}

#[tokio::test]
async fn test_execute_discards_body() {
    let transport = MockTransport::new();
    transport.reply(204, "").reply(500, "server exploded");
    let client = client_with(&transport);

    client.execute(Method::DELETE, "/Activities/run-1").await.unwrap();
    let err = client
        .execute(Method::DELETE, "/Activities/run-2")
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert_eq!(transport.releases(), 2);
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let transport = MockTransport::new();
    let client = client_with(&transport);

    let result = client.profile().await;
    assert!(matches!(result, Err(BandError::Transport(_))));
    assert_eq!(result.unwrap_or_default(), Profile::default());
}

#[tokio::test]
async fn test_clones_share_transport() {
    let transport = MockTransport::new();
    transport.reply(200, "{}").reply(200, "{}");
    let client = client_with(&transport);
    let clone = client.clone();

    let (a, b) = tokio::join!(client.profile(), clone.devices());
    a.unwrap();
    b.unwrap();
    assert_eq!(transport.sent().len(), 2);
}
