/*
 * Responsibility
 * - regions CRUD
 * - the id is assigned by the store at insert and never changes afterwards
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RegionRow {
    #[sqlx(rename = "regionId")]
    pub region_id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Field set for add and for full-replace update.
#[derive(Debug, Clone)]
pub struct NewRegion {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<RegionRow>, RepoError>;
    async fn get_by_id(&self, region_id: Uuid) -> Result<Option<RegionRow>, RepoError>;
    async fn add(&self, region: NewRegion) -> Result<RegionRow, RepoError>;
    /// Replaces every mutable field. `None` means the id matched no row and
    /// nothing was created.
    async fn update(&self, region_id: Uuid, region: NewRegion)
    -> Result<Option<RegionRow>, RepoError>;
    /// Returns the row as it was before removal.
    async fn delete(&self, region_id: Uuid) -> Result<Option<RegionRow>, RepoError>;
}

pub struct PgRegionRepository {
    db: PgPool,
}

impl PgRegionRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn get_all(&self) -> Result<Vec<RegionRow>, RepoError> {
        let rows = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT "regionId", code, name, area, lat, long, population
            FROM regions
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, region_id: Uuid) -> Result<Option<RegionRow>, RepoError> {
        let row = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT "regionId", code, name, area, lat, long, population
            FROM regions
            WHERE "regionId" = $1
            "#,
        )
        .bind(region_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn add(&self, region: NewRegion) -> Result<RegionRow, RepoError> {
        let row = sqlx::query_as::<_, RegionRow>(
            r#"
            INSERT INTO regions (code, name, area, lat, long, population)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING "regionId", code, name, area, lat, long, population
            "#,
        )
        .bind(region.code)
        .bind(region.name)
        .bind(region.area)
        .bind(region.lat)
        .bind(region.long)
        .bind(region.population)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        region_id: Uuid,
        region: NewRegion,
    ) -> Result<Option<RegionRow>, RepoError> {
        let row = sqlx::query_as::<_, RegionRow>(
            r#"
            UPDATE regions
            SET code = $2, name = $3, area = $4, lat = $5, long = $6, population = $7
            WHERE "regionId" = $1
            RETURNING "regionId", code, name, area, lat, long, population
            "#,
        )
        .bind(region_id)
        .bind(region.code)
        .bind(region.name)
        .bind(region.area)
        .bind(region.lat)
        .bind(region.long)
        .bind(region.population)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete(&self, region_id: Uuid) -> Result<Option<RegionRow>, RepoError> {
        let row = sqlx::query_as::<_, RegionRow>(
            r#"
            DELETE FROM regions
            WHERE "regionId" = $1
            RETURNING "regionId", code, name, area, lat, long, population
            "#,
        )
        .bind(region_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }
}
