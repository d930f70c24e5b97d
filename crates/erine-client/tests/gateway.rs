//! End-to-end tests for the cache gateway against a mock HTTP origin and
//! an in-memory cache store.

use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use erine_cache::memory::MemoryCacheStore;
use erine_client::{ErineClient, RequestOptions, TagPattern, keys};
use erine_core::config::client::ClientConfig;
use erine_core::error::ErrorKind;
use erine_core::traits::cache::CacheStore;
use erine_entity::CreateMessage;

fn make_client(server: &MockServer) -> (ErineClient, Arc<MemoryCacheStore>) {
    let store = Arc::new(MemoryCacheStore::default());
    let config = ClientConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_seconds: 5,
        default_ttl_ms: 30_000,
    };
    let client = ErineClient::new(&config, store.clone()).unwrap();
    (client, store)
}

fn messages_body() -> serde_json::Value {
    json!([{
        "id": "7b0f4e70-63a2-4b4e-9a3f-2f9f2f6f1a01",
        "name": "Mina",
        "message": "Fighting!",
        "date": "2026-08-01T12:00:00Z"
    }])
}

fn events_body() -> serde_json::Value {
    json!([{
        "id": "ev1",
        "title": "Summer concert",
        "date": "2026-09-01T18:00:00Z",
        "startTime": "18:00",
        "endTime": "21:00",
        "location": "Seoul"
    }])
}

async fn mount_messages(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_events(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_body()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_second_read_is_served_from_cache() {
    let server = MockServer::start().await;
    mount_messages(&server, 1).await;
    let (client, _) = make_client(&server);

    let first = client.get_messages(RequestOptions::default()).await.unwrap();
    let second = client.get_messages(RequestOptions::default()).await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second[0].name, "Mina");
    // expect(1) on the mock verifies the second read never hit the origin
}

#[tokio::test]
async fn test_miss_populates_key_index_and_registry() {
    let server = MockServer::start().await;
    mount_messages(&server, 1).await;
    let (client, store) = make_client(&server);

    client.get_messages(RequestOptions::default()).await.unwrap();

    let namespaced = keys::namespaced_key("messages", "messages:list");
    assert!(store.get(&namespaced).await.unwrap().is_some());

    let members = store.smembers(&keys::tag_key("messages")).await.unwrap();
    assert_eq!(members, vec![namespaced]);

    let tags = store.smembers(keys::TAG_REGISTRY_KEY).await.unwrap();
    assert_eq!(tags, vec!["messages".to_string()]);
}

#[tokio::test]
async fn test_revalidate_clears_tag_and_forces_refetch() {
    let server = MockServer::start().await;
    mount_messages(&server, 2).await;
    let (client, store) = make_client(&server);

    client.get_messages(RequestOptions::default()).await.unwrap();
    client.revalidate("messages").await.unwrap();

    let namespaced = keys::namespaced_key("messages", "messages:list");
    assert!(store.get(&namespaced).await.unwrap().is_none());
    assert!(store.smembers(&keys::tag_key("messages")).await.unwrap().is_empty());
    assert!(store.smembers(keys::TAG_REGISTRY_KEY).await.unwrap().is_empty());

    // refetches from the origin, satisfying expect(2)
    client.get_messages(RequestOptions::default()).await.unwrap();
}

#[tokio::test]
async fn test_invalidate_all_flushes_every_tag() {
    let server = MockServer::start().await;
    mount_messages(&server, 1).await;
    mount_events(&server, 1).await;
    let (client, store) = make_client(&server);

    client.get_messages(RequestOptions::default()).await.unwrap();
    client.get_schedule(RequestOptions::default(), None).await.unwrap();

    client.invalidate(None).await.unwrap();

    assert!(store.smembers(keys::TAG_REGISTRY_KEY).await.unwrap().is_empty());
    let messages_key = keys::namespaced_key("messages", "messages:list");
    let events_key = keys::namespaced_key("events", "events:list");
    assert!(store.get(&messages_key).await.unwrap().is_none());
    assert!(store.get(&events_key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_regex_invalidation_is_selective() {
    let server = MockServer::start().await;
    mount_messages(&server, 1).await;
    mount_events(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/eventx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    let (client, store) = make_client(&server);

    client.get_messages(RequestOptions::default()).await.unwrap();
    client.get_schedule(RequestOptions::default(), None).await.unwrap();

    // third tag derived from the URL, also matching the pattern
    let eventx_config = erine_client::RequestConfig::get("/eventx");
    let _: serde_json::Value = client
        .request(eventx_config.clone(), RequestOptions::default())
        .await
        .unwrap();

    let mut tags = store.smembers(keys::TAG_REGISTRY_KEY).await.unwrap();
    tags.sort();
    assert_eq!(tags, vec!["events", "eventx", "messages"]);

    let pattern = TagPattern::Matching(Regex::new("^event").unwrap());
    client.invalidate(Some(pattern)).await.unwrap();

    let events_key = keys::namespaced_key("events", "events:list");
    let eventx_key =
        keys::namespaced_key("eventx", &keys::request_signature(&eventx_config));
    let messages_key = keys::namespaced_key("messages", "messages:list");
    assert!(store.get(&events_key).await.unwrap().is_none());
    assert!(store.get(&eventx_key).await.unwrap().is_none());
    assert!(store.get(&messages_key).await.unwrap().is_some());

    assert!(store.smembers(&keys::tag_key("events")).await.unwrap().is_empty());
    assert!(store.smembers(&keys::tag_key("eventx")).await.unwrap().is_empty());

    let tags = store.smembers(keys::TAG_REGISTRY_KEY).await.unwrap();
    assert_eq!(tags, vec!["messages".to_string()]);
}

#[tokio::test]
async fn test_send_message_revalidates_messages_tag() {
    let server = MockServer::start().await;
    mount_messages(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "ok": true,
            "id": "c1a2b3d4-0000-0000-0000-000000000001"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (client, store) = make_client(&server);

    client.get_messages(RequestOptions::default()).await.unwrap();

    let receipt = client
        .send_message(&CreateMessage {
            name: "Yuna".to_string(),
            message: "Saw you in Osaka!".to_string(),
        })
        .await
        .unwrap();

    assert!(receipt.ok);
    let messages_key = keys::namespaced_key("messages", "messages:list");
    assert!(store.get(&messages_key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_prefetch_isolates_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profiles"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "profile exploded"})),
        )
        .mount(&server)
        .await;
    mount_messages(&server, 1).await;
    mount_events(&server, 1).await;
    let (client, store) = make_client(&server);

    client.prefetch(None).await;

    let messages_key = keys::namespaced_key("messages", "messages:list");
    let events_key = keys::namespaced_key("events", "events:list");
    let profile_key = keys::namespaced_key("profiles", "profiles:single");
    assert!(store.get(&messages_key).await.unwrap().is_some());
    assert!(store.get(&events_key).await.unwrap().is_some());
    assert!(store.get(&profile_key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_upstream_error_message_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profiles"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Profile not found"})),
        )
        .mount(&server)
        .await;
    let (client, _) = make_client(&server);

    let err = client.get_profile(RequestOptions::default()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert_eq!(err.message, "Profile not found");
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;
    let (client, _) = make_client(&server);

    let err = client.get_gallery(RequestOptions::default()).await.unwrap_err();
    assert_eq!(err.message, "503 Service Unavailable");
}

#[tokio::test]
async fn test_ttl_override_expires_entry() {
    let server = MockServer::start().await;
    mount_messages(&server, 2).await;
    let (client, _) = make_client(&server);

    let options = RequestOptions::default().with_revalidate(Duration::from_millis(40));
    client.get_messages(options).await.unwrap();

    tokio::time::sleep(Duration::from_millis(150)).await;

    // expired entry forces a second origin call
    client.get_messages(RequestOptions::default()).await.unwrap();
}

#[tokio::test]
async fn test_health_check_bypasses_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(2)
        .mount(&server)
        .await;
    let (client, store) = make_client(&server);

    let status = client.health_check(None).await.unwrap();
    assert_eq!(status.status, "ok");
    client.health_check(None).await.unwrap();

    // nothing was stored or indexed
    assert!(store.smembers(keys::TAG_REGISTRY_KEY).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancelled_request_aborts_with_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(messages_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let (client, _) = make_client(&server);

    let token = CancellationToken::new();
    token.cancel();

    let options = RequestOptions::default().with_cancel(token);
    let err = client.get_messages(options).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert_eq!(err.message, "Request cancelled");
}

#[tokio::test]
async fn test_schedule_normalizes_and_limits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "ev1",
                "title": "Summer concert",
                "date": "2026-09-01T18:00:00Z",
                "startTime": "18:00",
                "endTime": "21:00",
                "location": "Seoul"
            },
            { "title": "Fan sign" },
            { "_id": "legacy42", "title": "Radio show", "date": "garbage" }
        ])))
        .mount(&server)
        .await;
    let (client, _) = make_client(&server);

    let all = client
        .get_schedule(RequestOptions::default(), None)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].date, "2026-09-01");
    assert_eq!(all[1].location, "TBA");
    assert_eq!(all[1].start_time, "00:00");
    assert_eq!(all[2].id, "legacy42");

    let limited = client
        .get_schedule(RequestOptions::default(), Some(1))
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
}
