//! Display-oriented schedule record.
//!
//! Produced by the API client from raw event records; every field is
//! guaranteed present so the schedule widget never deals with gaps.

use serde::{Deserialize, Serialize};

/// A normalized schedule entry ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Stable identifier (event id, or generated when the record had none).
    pub id: String,
    /// Event title.
    pub title: String,
    /// Entry kind; always `"event"` for entries derived from events.
    #[serde(rename = "type")]
    pub kind: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Start time, defaulting to the start of the day.
    pub start_time: String,
    /// End time, defaulting to the end of the day.
    pub end_time: String,
    /// Venue, defaulting to a placeholder when unannounced.
    pub location: String,
    /// Longer description.
    pub description: Option<String>,
    /// Promotional image URL.
    pub image_url: Option<String>,
}
