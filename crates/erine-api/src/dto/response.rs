//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Reported status string.
    pub status: String,
}

/// Acknowledgement for a stored guestbook message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreatedResponse {
    /// Whether the message was stored.
    pub ok: bool,
    /// Identifier of the stored message.
    pub id: Uuid,
}
