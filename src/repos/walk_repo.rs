/*
 * Responsibility
 * - walks CRUD
 * - both foreign keys are RESTRICT; the existence probes back the
 *   delete guard on regions and walk difficulties
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WalkRow {
    #[sqlx(rename = "walkId")]
    pub walk_id: Uuid,
    pub name: String,
    pub description: String,
    pub length: f64,
    #[sqlx(rename = "regionId")]
    pub region_id: Uuid,
    #[sqlx(rename = "walkDifficultyId")]
    pub walk_difficulty_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct NewWalk {
    pub name: String,
    pub description: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

#[async_trait]
pub trait WalkRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WalkRow>, RepoError>;
    async fn get_by_id(&self, walk_id: Uuid) -> Result<Option<WalkRow>, RepoError>;
    async fn add(&self, walk: NewWalk) -> Result<WalkRow, RepoError>;
    async fn update(&self, walk_id: Uuid, walk: NewWalk) -> Result<Option<WalkRow>, RepoError>;
    async fn delete(&self, walk_id: Uuid) -> Result<Option<WalkRow>, RepoError>;

    /// True when any walk still points at the given region.
    async fn references_region(&self, region_id: Uuid) -> Result<bool, RepoError>;
    /// True when any walk still points at the given walk difficulty.
    async fn references_difficulty(&self, walk_difficulty_id: Uuid) -> Result<bool, RepoError>;
}

pub struct PgWalkRepository {
    db: PgPool,
}

impl PgWalkRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WalkRepository for PgWalkRepository {
    async fn get_all(&self) -> Result<Vec<WalkRow>, RepoError> {
        let rows = sqlx::query_as::<_, WalkRow>(
            r#"
            SELECT "walkId", name, description, length, "regionId", "walkDifficultyId"
            FROM walks
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, walk_id: Uuid) -> Result<Option<WalkRow>, RepoError> {
        let row = sqlx::query_as::<_, WalkRow>(
            r#"
            SELECT "walkId", name, description, length, "regionId", "walkDifficultyId"
            FROM walks
            WHERE "walkId" = $1
            "#,
        )
        .bind(walk_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn add(&self, walk: NewWalk) -> Result<WalkRow, RepoError> {
        let row = sqlx::query_as::<_, WalkRow>(
            r#"
            INSERT INTO walks (name, description, length, "regionId", "walkDifficultyId")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING "walkId", name, description, length, "regionId", "walkDifficultyId"
            "#,
        )
        .bind(walk.name)
        .bind(walk.description)
        .bind(walk.length)
        .bind(walk.region_id)
        .bind(walk.walk_difficulty_id)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(&self, walk_id: Uuid, walk: NewWalk) -> Result<Option<WalkRow>, RepoError> {
        let row = sqlx::query_as::<_, WalkRow>(
            r#"
            UPDATE walks
            SET name = $2, description = $3, length = $4,
                "regionId" = $5, "walkDifficultyId" = $6
            WHERE "walkId" = $1
            RETURNING "walkId", name, description, length, "regionId", "walkDifficultyId"
            "#,
        )
        .bind(walk_id)
        .bind(walk.name)
        .bind(walk.description)
        .bind(walk.length)
        .bind(walk.region_id)
        .bind(walk.walk_difficulty_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete(&self, walk_id: Uuid) -> Result<Option<WalkRow>, RepoError> {
        let row = sqlx::query_as::<_, WalkRow>(
            r#"
            DELETE FROM walks
            WHERE "walkId" = $1
            RETURNING "walkId", name, description, length, "regionId", "walkDifficultyId"
            "#,
        )
        .bind(walk_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn references_region(&self, region_id: Uuid) -> Result<bool, RepoError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM walks WHERE "regionId" = $1)
            "#,
        )
        .bind(region_id)
        .fetch_one(&self.db)
        .await?;

        Ok(exists)
    }

    async fn references_difficulty(&self, walk_difficulty_id: Uuid) -> Result<bool, RepoError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM walks WHERE "walkDifficultyId" = $1)
            "#,
        )
        .bind(walk_difficulty_id)
        .fetch_one(&self.db)
        .await?;

        Ok(exists)
    }
}
