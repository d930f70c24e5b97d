//! Guestbook message record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A guestbook message left by a visitor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// Visitor display name.
    pub name: String,
    /// Message body.
    pub message: String,
    /// When the message was posted.
    pub date: DateTime<Utc>,
}

/// Payload for posting a new guestbook message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessage {
    /// Visitor display name.
    pub name: String,
    /// Message body.
    pub message: String,
}
