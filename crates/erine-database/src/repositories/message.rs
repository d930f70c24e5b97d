//! Guestbook message repository.

use async_trait::async_trait;
use sqlx::PgPool;

use erine_core::error::{AppError, ErrorKind};
use erine_core::result::AppResult;
use erine_entity::{CreateMessage, Message};

/// Access to guestbook messages.
#[async_trait]
pub trait MessageRepository: Send + Sync + 'static {
    /// List every message, newest first.
    async fn list(&self) -> AppResult<Vec<Message>>;

    /// Store a new message and return it.
    async fn create(&self, message: &CreateMessage) -> AppResult<Message>;
}

/// Postgres-backed message repository.
#[derive(Debug, Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn list(&self) -> AppResult<Vec<Message>> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages ORDER BY date DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list messages", e))
    }

    async fn create(&self, message: &CreateMessage) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO messages (name, message) VALUES ($1, $2) RETURNING *",
        )
        .bind(&message.name)
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create message", e))
    }
}
