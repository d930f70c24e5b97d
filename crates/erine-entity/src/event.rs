//! Event record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A scheduled event (performance, fan meeting, broadcast, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Calendar date of the event.
    pub date: DateTime<Utc>,
    /// Venue or city.
    pub location: Option<String>,
    /// Start time as `"HH:MM"`.
    pub start_time: Option<String>,
    /// End time as `"HH:MM"`.
    pub end_time: Option<String>,
    /// Promotional image URL.
    pub image_url: Option<String>,
}

/// Data required to create an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    /// Event title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Calendar date of the event.
    pub date: DateTime<Utc>,
    /// Venue or city.
    pub location: Option<String>,
    /// Start time as `"HH:MM"`.
    pub start_time: Option<String>,
    /// End time as `"HH:MM"`.
    pub end_time: Option<String>,
    /// Promotional image URL.
    pub image_url: Option<String>,
}
