/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 * - repositories behind trait objects so tests can swap the backing store
 * - Clone is cheap (Arc all the way down)
 */
use std::sync::Arc;

use crate::repos::region_repo::RegionRepository;
use crate::repos::user_repo::UserStore;
use crate::repos::walk_difficulty_repo::WalkDifficultyRepository;
use crate::repos::walk_repo::WalkRepository;
use crate::services::auth::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub regions: Arc<dyn RegionRepository>,
    pub difficulties: Arc<dyn WalkDifficultyRepository>,
    pub walks: Arc<dyn WalkRepository>,
    pub users: Arc<UserStore>,
    pub auth: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        regions: Arc<dyn RegionRepository>,
        difficulties: Arc<dyn WalkDifficultyRepository>,
        walks: Arc<dyn WalkRepository>,
        users: Arc<UserStore>,
        auth: Arc<TokenService>,
    ) -> Self {
        Self {
            regions,
            difficulties,
            walks,
            users,
            auth,
        }
    }
}
