/*
 * Responsibility
 * - walk_difficulties CRUD (no foreign keys)
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WalkDifficultyRow {
    #[sqlx(rename = "walkDifficultyId")]
    pub walk_difficulty_id: Uuid,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct NewWalkDifficulty {
    pub code: String,
}

#[async_trait]
pub trait WalkDifficultyRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<WalkDifficultyRow>, RepoError>;
    async fn get_by_id(
        &self,
        walk_difficulty_id: Uuid,
    ) -> Result<Option<WalkDifficultyRow>, RepoError>;
    async fn add(&self, difficulty: NewWalkDifficulty) -> Result<WalkDifficultyRow, RepoError>;
    async fn update(
        &self,
        walk_difficulty_id: Uuid,
        difficulty: NewWalkDifficulty,
    ) -> Result<Option<WalkDifficultyRow>, RepoError>;
    async fn delete(
        &self,
        walk_difficulty_id: Uuid,
    ) -> Result<Option<WalkDifficultyRow>, RepoError>;
}

pub struct PgWalkDifficultyRepository {
    db: PgPool,
}

impl PgWalkDifficultyRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WalkDifficultyRepository for PgWalkDifficultyRepository {
    async fn get_all(&self) -> Result<Vec<WalkDifficultyRow>, RepoError> {
        let rows = sqlx::query_as::<_, WalkDifficultyRow>(
            r#"
            SELECT "walkDifficultyId", code
            FROM walk_difficulties
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn get_by_id(
        &self,
        walk_difficulty_id: Uuid,
    ) -> Result<Option<WalkDifficultyRow>, RepoError> {
        let row = sqlx::query_as::<_, WalkDifficultyRow>(
            r#"
            SELECT "walkDifficultyId", code
            FROM walk_difficulties
            WHERE "walkDifficultyId" = $1
            "#,
        )
        .bind(walk_difficulty_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn add(&self, difficulty: NewWalkDifficulty) -> Result<WalkDifficultyRow, RepoError> {
        let row = sqlx::query_as::<_, WalkDifficultyRow>(
            r#"
            INSERT INTO walk_difficulties (code)
            VALUES ($1)
            RETURNING "walkDifficultyId", code
            "#,
        )
        .bind(difficulty.code)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        walk_difficulty_id: Uuid,
        difficulty: NewWalkDifficulty,
    ) -> Result<Option<WalkDifficultyRow>, RepoError> {
        let row = sqlx::query_as::<_, WalkDifficultyRow>(
            r#"
            UPDATE walk_difficulties
            SET code = $2
            WHERE "walkDifficultyId" = $1
            RETURNING "walkDifficultyId", code
            "#,
        )
        .bind(walk_difficulty_id)
        .bind(difficulty.code)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete(
        &self,
        walk_difficulty_id: Uuid,
    ) -> Result<Option<WalkDifficultyRow>, RepoError> {
        let row = sqlx::query_as::<_, WalkDifficultyRow>(
            r#"
            DELETE FROM walk_difficulties
            WHERE "walkDifficultyId" = $1
            RETURNING "walkDifficultyId", code
            "#,
        )
        .bind(walk_difficulty_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }
}
