//! Route definitions for the Erine HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(profile_routes())
        .merge(gallery_routes())
        .merge(event_routes())
        .merge(message_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", get(handlers::profile::get_profile))
        .route("/profiles", post(handlers::profile::create_profile))
}

fn gallery_routes() -> Router<AppState> {
    Router::new().route("/gallery", get(handlers::gallery::list_gallery))
}

fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list_events))
        .route("/events", post(handlers::event::create_event))
        .route("/events/{id}", delete(handlers::event::delete_event))
}

fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(handlers::message::list_messages))
        .route("/messages", post(handlers::message::create_message))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
