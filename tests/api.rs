//! Integration tests for the HTTP API, running entirely in-process with
//! in-memory repositories and the in-memory cache store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use erine_api::state::AppState;
use erine_cache::memory::MemoryCacheStore;
use erine_cache::provider::CacheManager;
use erine_client::{ErineClient, RequestOptions};
use erine_core::config::AppConfig;
use erine_core::config::client::ClientConfig;
use erine_database::repositories::{
    MemoryEventRepository, MemoryGalleryRepository, MemoryMessageRepository,
    MemoryProfileRepository,
};

fn test_state() -> AppState {
    AppState {
        config: Arc::new(AppConfig::load("test").expect("default config")),
        cache: Arc::new(CacheManager::from_store(Arc::new(
            MemoryCacheStore::default(),
        ))),
        profiles: Arc::new(MemoryProfileRepository::new()),
        gallery: Arc::new(MemoryGalleryRepository::new()),
        events: Arc::new(MemoryEventRepository::new()),
        messages: Arc::new(MemoryMessageRepository::new()),
    }
}

fn test_app() -> Router {
    erine_api::build_router(test_state())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_profile_lifecycle() {
    let app = test_app();

    let response = app.clone().oneshot(get("/api/profiles")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Profile not found");

    let payload = json!({
        "name": "Erine",
        "stageName": "ERINE",
        "bio": "Main vocalist",
        "generation": "3rd"
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/profiles", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Erine");
    assert_eq!(created["stageName"], "ERINE");

    let response = app.clone().oneshot(get("/api/profiles")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_json("/api/profiles", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["message"], "Profile already exists");
}

#[tokio::test]
async fn test_profile_requires_name() {
    let app = test_app();
    let response = app
        .oneshot(post_json("/api/profiles", json!({"name": "  ", "bio": "x"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_message_lifecycle() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/messages",
            json!({"name": "Mina", "message": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Name and message are required"
    );

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/messages",
            json!({"name": "Mina", "message": "Fighting!"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt = body_json(response).await;
    assert_eq!(receipt["ok"], true);
    assert!(receipt["id"].is_string());

    let response = app.oneshot(get("/api/messages")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let messages = body_json(response).await;
    assert_eq!(messages.as_array().unwrap().len(), 1);
    assert_eq!(messages[0]["message"], "Fighting!");
}

#[tokio::test]
async fn test_event_lifecycle() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/events",
            json!({
                "title": "Fan meeting",
                "date": "2026-10-01T10:00:00Z",
                "location": "Seoul",
                "startTime": "10:00",
                "endTime": "12:00"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app.clone().oneshot(get("/api/events")).await.unwrap();
    let events = body_json(response).await;
    assert_eq!(events.as_array().unwrap().len(), 1);
    assert_eq!(events[0]["startTime"], "10:00");

    let delete = |id: &str| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/events/{id}"))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete(&id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Event deleted");

    let response = app.oneshot(delete(&id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_gallery_empty() {
    let app = test_app();
    let response = app.oneshot(get("/api/gallery")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

/// Full round trip: the cache gateway talking to a real in-process server.
#[tokio::test]
async fn test_gateway_against_live_server() {
    let app = test_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client_config = ClientConfig {
        base_url: format!("http://{addr}/api"),
        timeout_seconds: 5,
        default_ttl_ms: 30_000,
    };
    let client = ErineClient::new(&client_config, Arc::new(MemoryCacheStore::default())).unwrap();

    let messages = client.get_messages(RequestOptions::default()).await.unwrap();
    assert!(messages.is_empty());

    let receipt = client
        .send_message(&erine_entity::CreateMessage {
            name: "Yuna".to_string(),
            message: "Hello from the guestbook".to_string(),
        })
        .await
        .unwrap();
    assert!(receipt.ok);

    // send_message revalidated the tag, so this read sees the new message
    let messages = client.get_messages(RequestOptions::default()).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "Yuna");

    let status = client.health_check(None).await.unwrap();
    assert_eq!(status.status, "ok");

    let err = client
        .get_profile(RequestOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.message, "Profile not found");
}
