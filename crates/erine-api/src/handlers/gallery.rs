//! Gallery handlers.

use axum::Json;
use axum::extract::State;

use erine_entity::GalleryImage;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/gallery
pub async fn list_gallery(State(state): State<AppState>) -> ApiResult<Json<Vec<GalleryImage>>> {
    let images = state.gallery.list().await?;
    Ok(Json(images))
}
