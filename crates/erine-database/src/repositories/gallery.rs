//! Gallery repository.

use async_trait::async_trait;
use sqlx::PgPool;

use erine_core::error::{AppError, ErrorKind};
use erine_core::result::AppResult;
use erine_entity::GalleryImage;

/// Read access to the gallery.
#[async_trait]
pub trait GalleryRepository: Send + Sync + 'static {
    /// List every gallery image, newest first.
    async fn list(&self) -> AppResult<Vec<GalleryImage>>;
}

/// Postgres-backed gallery repository.
#[derive(Debug, Clone)]
pub struct PgGalleryRepository {
    pool: PgPool,
}

impl PgGalleryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryRepository for PgGalleryRepository {
    async fn list(&self) -> AppResult<Vec<GalleryImage>> {
        sqlx::query_as::<_, GalleryImage>("SELECT * FROM gallery_images ORDER BY date DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list gallery", e))
    }
}
