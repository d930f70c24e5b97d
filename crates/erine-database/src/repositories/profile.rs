//! Profile repository.

use async_trait::async_trait;
use sqlx::PgPool;

use erine_core::error::{AppError, ErrorKind};
use erine_core::result::AppResult;
use erine_entity::{CreateProfile, Profile};

/// Access to the single celebrity profile.
#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    /// Fetch the profile, if one has been created.
    async fn find(&self) -> AppResult<Option<Profile>>;

    /// Create the profile. Fails with a conflict if one already exists.
    async fn create(&self, profile: &CreateProfile) -> AppResult<Profile>;
}

/// Postgres-backed profile repository.
#[derive(Debug, Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find(&self) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY name LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch profile", e))
    }

    async fn create(&self, profile: &CreateProfile) -> AppResult<Profile> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count profiles", e))?;
        if existing > 0 {
            return Err(AppError::conflict("Profile already exists"));
        }

        sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (name, stage_name, bio, generation, birth_date, position, \
             join_date, image_cover, image_profile, image_portrait) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(&profile.name)
        .bind(&profile.stage_name)
        .bind(&profile.bio)
        .bind(&profile.generation)
        .bind(&profile.birth_date)
        .bind(&profile.position)
        .bind(&profile.join_date)
        .bind(&profile.image_cover)
        .bind(&profile.image_profile)
        .bind(&profile.image_portrait)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create profile", e))
    }
}
