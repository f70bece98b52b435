/*
 * Responsibility
 * - in-memory repository implementations for tests
 * - same interface and semantics as the PostgreSQL implementations
 */
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::region_repo::{NewRegion, RegionRepository, RegionRow};
use crate::repos::walk_difficulty_repo::{
    NewWalkDifficulty, WalkDifficultyRepository, WalkDifficultyRow,
};
use crate::repos::walk_repo::{NewWalk, WalkRepository, WalkRow};

#[derive(Clone, Default)]
pub struct InMemoryRegionRepository {
    rows: Arc<RwLock<HashMap<Uuid, RegionRow>>>,
}

impl InMemoryRegionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn get_all(&self) -> Result<Vec<RegionRow>, RepoError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, region_id: Uuid) -> Result<Option<RegionRow>, RepoError> {
        Ok(self.rows.read().await.get(&region_id).cloned())
    }

    async fn add(&self, region: NewRegion) -> Result<RegionRow, RepoError> {
        let row = RegionRow {
            region_id: Uuid::new_v4(),
            code: region.code,
            name: region.name,
            area: region.area,
            lat: region.lat,
            long: region.long,
            population: region.population,
        };
        self.rows.write().await.insert(row.region_id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        region_id: Uuid,
        region: NewRegion,
    ) -> Result<Option<RegionRow>, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&region_id) {
            Some(row) => {
                row.code = region.code;
                row.name = region.name;
                row.area = region.area;
                row.lat = region.lat;
                row.long = region.long;
                row.population = region.population;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, region_id: Uuid) -> Result<Option<RegionRow>, RepoError> {
        Ok(self.rows.write().await.remove(&region_id))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryWalkDifficultyRepository {
    rows: Arc<RwLock<HashMap<Uuid, WalkDifficultyRow>>>,
}

impl InMemoryWalkDifficultyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalkDifficultyRepository for InMemoryWalkDifficultyRepository {
    async fn get_all(&self) -> Result<Vec<WalkDifficultyRow>, RepoError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get_by_id(
        &self,
        walk_difficulty_id: Uuid,
    ) -> Result<Option<WalkDifficultyRow>, RepoError> {
        Ok(self.rows.read().await.get(&walk_difficulty_id).cloned())
    }

    async fn add(&self, difficulty: NewWalkDifficulty) -> Result<WalkDifficultyRow, RepoError> {
        let row = WalkDifficultyRow {
            walk_difficulty_id: Uuid::new_v4(),
            code: difficulty.code,
        };
        self.rows
            .write()
            .await
            .insert(row.walk_difficulty_id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        walk_difficulty_id: Uuid,
        difficulty: NewWalkDifficulty,
    ) -> Result<Option<WalkDifficultyRow>, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&walk_difficulty_id) {
            Some(row) => {
                row.code = difficulty.code;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(
        &self,
        walk_difficulty_id: Uuid,
    ) -> Result<Option<WalkDifficultyRow>, RepoError> {
        Ok(self.rows.write().await.remove(&walk_difficulty_id))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryWalkRepository {
    rows: Arc<RwLock<HashMap<Uuid, WalkRow>>>,
}

impl InMemoryWalkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalkRepository for InMemoryWalkRepository {
    async fn get_all(&self) -> Result<Vec<WalkRow>, RepoError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, walk_id: Uuid) -> Result<Option<WalkRow>, RepoError> {
        Ok(self.rows.read().await.get(&walk_id).cloned())
    }

    async fn add(&self, walk: NewWalk) -> Result<WalkRow, RepoError> {
        let row = WalkRow {
            walk_id: Uuid::new_v4(),
            name: walk.name,
            description: walk.description,
            length: walk.length,
            region_id: walk.region_id,
            walk_difficulty_id: walk.walk_difficulty_id,
        };
        self.rows.write().await.insert(row.walk_id, row.clone());
        Ok(row)
    }

    async fn update(&self, walk_id: Uuid, walk: NewWalk) -> Result<Option<WalkRow>, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&walk_id) {
            Some(row) => {
                row.name = walk.name;
                row.description = walk.description;
                row.length = walk.length;
                row.region_id = walk.region_id;
                row.walk_difficulty_id = walk.walk_difficulty_id;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, walk_id: Uuid) -> Result<Option<WalkRow>, RepoError> {
        Ok(self.rows.write().await.remove(&walk_id))
    }

    async fn references_region(&self, region_id: Uuid) -> Result<bool, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .any(|w| w.region_id == region_id))
    }

    async fn references_difficulty(&self, walk_difficulty_id: Uuid) -> Result<bool, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .any(|w| w.walk_difficulty_id == walk_difficulty_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waikato() -> NewRegion {
        NewRegion {
            code: "WKO".to_string(),
            name: "Waikato".to_string(),
            area: 1000.0,
            lat: -37.5,
            long: 175.2,
            population: 500_000,
        }
    }

    #[tokio::test]
    async fn add_assigns_distinct_ids() {
        let repo = InMemoryRegionRepository::new();

        let a = repo.add(waikato()).await.unwrap();
        let b = repo.add(waikato()).await.unwrap();

        assert_ne!(a.region_id, b.region_id);
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_by_id_returns_what_add_persisted() {
        let repo = InMemoryRegionRepository::new();

        let added = repo.add(waikato()).await.unwrap();
        let fetched = repo.get_by_id(added.region_id).await.unwrap().unwrap();

        assert_eq!(fetched, added);
    }

    #[tokio::test]
    async fn update_replaces_every_field_and_keeps_the_id() {
        let repo = InMemoryRegionRepository::new();
        let added = repo.add(waikato()).await.unwrap();

        let mut replacement = waikato();
        replacement.code = "BOP".to_string();
        replacement.name = "Bay of Plenty".to_string();
        replacement.population = 350_000;

        let updated = repo
            .update(added.region_id, replacement)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.region_id, added.region_id);
        assert_eq!(updated.code, "BOP");
        assert_eq!(updated.population, 350_000);
    }

    #[tokio::test]
    async fn update_of_missing_id_does_not_create_a_row() {
        let repo = InMemoryRegionRepository::new();

        let result = repo.update(Uuid::new_v4(), waikato()).await.unwrap();

        assert!(result.is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_returns_the_removed_row_once() {
        let repo = InMemoryRegionRepository::new();
        let added = repo.add(waikato()).await.unwrap();

        let removed = repo.delete(added.region_id).await.unwrap().unwrap();
        assert_eq!(removed, added);

        assert!(repo.get_by_id(added.region_id).await.unwrap().is_none());
        assert!(repo.delete(added.region_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reference_probes_see_only_live_walks() {
        let walks = InMemoryWalkRepository::new();
        let region_id = Uuid::new_v4();
        let difficulty_id = Uuid::new_v4();

        assert!(!walks.references_region(region_id).await.unwrap());

        let walk = walks
            .add(NewWalk {
                name: "Huka Falls Walk".to_string(),
                description: "River-side track to the falls".to_string(),
                length: 7.0,
                region_id,
                walk_difficulty_id: difficulty_id,
            })
            .await
            .unwrap();

        assert!(walks.references_region(region_id).await.unwrap());
        assert!(walks.references_difficulty(difficulty_id).await.unwrap());

        walks.delete(walk.walk_id).await.unwrap();
        assert!(!walks.references_region(region_id).await.unwrap());
        assert!(!walks.references_difficulty(difficulty_id).await.unwrap());
    }
}
