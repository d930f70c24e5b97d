//! Wire types specific to the client.
//!
//! [`EventRecord`] is deliberately lenient: historical event documents are
//! missing fields and occasionally carry malformed dates, and the schedule
//! mapper papers over all of that.

use serde::{Deserialize, Serialize};

/// A raw event record as returned by `GET /events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Identifier; older documents expose `_id` instead.
    #[serde(alias = "_id")]
    pub id: Option<String>,
    /// Event title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Raw date string; may be absent or unparseable.
    pub date: Option<String>,
    /// Venue or city.
    pub location: Option<String>,
    /// Start time as `"HH:MM"`.
    pub start_time: Option<String>,
    /// End time as `"HH:MM"`.
    pub end_time: Option<String>,
    /// Promotional image URL.
    pub image_url: Option<String>,
}

/// Acknowledgement returned by `POST /messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageReceipt {
    /// Whether the message was stored.
    pub ok: bool,
    /// Identifier of the stored message.
    pub id: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Reported status string.
    pub status: String,
}
