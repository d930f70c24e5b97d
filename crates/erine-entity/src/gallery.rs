//! Gallery image record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Category of a gallery image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum GalleryCategory {
    Photoshoot,
    Performance,
    Candid,
    Official,
}

/// A single image in the fan-site gallery.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    /// Unique image identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Source URL of the image.
    pub image_url: String,
    /// Image category.
    pub category: GalleryCategory,
    /// When the photo was taken or published.
    pub date: DateTime<Utc>,
    /// Optional caption.
    pub description: Option<String>,
}
