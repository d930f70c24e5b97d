//! Celebrity profile record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The single celebrity profile rendered by the site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// Legal name.
    pub name: String,
    /// Stage name shown in headers.
    pub stage_name: Option<String>,
    /// Short biography.
    pub bio: String,
    /// Group generation label.
    pub generation: Option<String>,
    /// Birth date as displayed (free-form).
    pub birth_date: Option<String>,
    /// Position within the group.
    pub position: Option<String>,
    /// Date the member joined.
    pub join_date: Option<String>,
    /// Cover banner image URL.
    pub image_cover: Option<String>,
    /// Avatar image URL.
    pub image_profile: Option<String>,
    /// Portrait image URL.
    pub image_portrait: Option<String>,
}

/// Data required to create the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfile {
    /// Legal name.
    pub name: String,
    /// Stage name.
    pub stage_name: Option<String>,
    /// Short biography.
    pub bio: String,
    /// Group generation label.
    pub generation: Option<String>,
    /// Birth date as displayed.
    pub birth_date: Option<String>,
    /// Position within the group.
    pub position: Option<String>,
    /// Date the member joined.
    pub join_date: Option<String>,
    /// Cover banner image URL.
    pub image_cover: Option<String>,
    /// Avatar image URL.
    pub image_profile: Option<String>,
    /// Portrait image URL.
    pub image_portrait: Option<String>,
}
