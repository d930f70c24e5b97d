//! Profile handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use erine_core::error::AppError;
use erine_entity::{CreateProfile, Profile};

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/profiles
pub async fn get_profile(State(state): State<AppState>) -> ApiResult<Json<Profile>> {
    let profile = state
        .profiles
        .find()
        .await?
        .ok_or_else(|| AppError::not_found("Profile not found"))?;
    Ok(Json(profile))
}

/// POST /api/profiles
pub async fn create_profile(
    State(state): State<AppState>,
    Json(payload): Json<CreateProfile>,
) -> ApiResult<(StatusCode, Json<Profile>)> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Profile name is required").into());
    }

    let profile = state.profiles.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}
