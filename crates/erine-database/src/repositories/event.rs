//! Event repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use erine_core::error::{AppError, ErrorKind};
use erine_core::result::AppResult;
use erine_entity::{CreateEvent, Event};

/// Access to scheduled events.
#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    /// List every event, soonest first.
    async fn list(&self) -> AppResult<Vec<Event>>;

    /// Create a new event and return it.
    async fn create(&self, event: &CreateEvent) -> AppResult<Event>;

    /// Delete an event by id. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Postgres-backed event repository.
#[derive(Debug, Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn list(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))
    }

    async fn create(&self, event: &CreateEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (title, description, date, location, start_time, end_time, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.location)
        .bind(&event.start_time)
        .bind(&event.end_time)
        .bind(&event.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;
        Ok(result.rows_affected() > 0)
    }
}
