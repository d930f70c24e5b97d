//! Application state shared across all handlers.

use std::sync::Arc;

use erine_cache::provider::CacheManager;
use erine_core::config::AppConfig;
use erine_database::repositories::{
    EventRepository, GalleryRepository, MessageRepository, ProfileRepository,
};

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// Repositories are trait objects so the Postgres implementations can be
/// swapped for in-memory ones in demo mode and tests.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Cache manager (Redis or in-memory).
    pub cache: Arc<CacheManager>,
    /// Profile repository.
    pub profiles: Arc<dyn ProfileRepository>,
    /// Gallery repository.
    pub gallery: Arc<dyn GalleryRepository>,
    /// Event repository.
    pub events: Arc<dyn EventRepository>,
    /// Guestbook message repository.
    pub messages: Arc<dyn MessageRepository>,
}
