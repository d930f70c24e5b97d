//! Event handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use erine_core::error::AppError;
use erine_entity::{CreateEvent, Event};

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<Event>>> {
    let events = state.events.list().await?;
    Ok(Json(events))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEvent>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    if payload.title.trim().is_empty() {
        return Err(AppError::validation("Event title is required").into());
    }

    let event = state.events.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    if !state.events.delete(id).await? {
        return Err(AppError::not_found("Event not found").into());
    }
    Ok(Json(serde_json::json!({"message": "Event deleted"})))
}
