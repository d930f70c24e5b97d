//! Guestbook message handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use erine_core::error::AppError;
use erine_entity::{CreateMessage, Message};

use crate::dto::response::MessageCreatedResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/messages
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<Json<Vec<Message>>> {
    let messages = state.messages.list().await?;
    Ok(Json(messages))
}

/// POST /api/messages
pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessage>,
) -> ApiResult<(StatusCode, Json<MessageCreatedResponse>)> {
    if payload.name.trim().is_empty() || payload.message.trim().is_empty() {
        return Err(AppError::validation("Name and message are required").into());
    }

    let message = state.messages.create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageCreatedResponse {
            ok: true,
            id: message.id,
        }),
    ))
}
