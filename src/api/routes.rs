/*
 * Responsibility
 * - URL structure: /health, /auth/login, /region, /walkdifficulty, /walk
 * - which role gates which scope: readers for GET, writers for mutations
 */
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::api::handlers::{
    auth::login,
    health::health,
    regions::{create_region, delete_region, get_region, list_regions, update_region},
    walk_difficulties::{
        create_walk_difficulty, delete_walk_difficulty, get_walk_difficulty,
        list_walk_difficulties, update_walk_difficulty,
    },
    walks::{create_walk, delete_walk, get_walk, list_walks, update_walk},
};
use crate::middleware::require_role;
use crate::repos::user_repo::Role;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let reads = require_role::require(
        Router::new()
            .route("/region", get(list_regions))
            .route("/region/{id}", get(get_region))
            .route("/walkdifficulty", get(list_walk_difficulties))
            .route("/walkdifficulty/{id}", get(get_walk_difficulty))
            .route("/walk", get(list_walks))
            .route("/walk/{id}", get(get_walk)),
        state.clone(),
        Role::Reader,
    );

    let writes = require_role::require(
        Router::new()
            .route("/region", post(create_region))
            .route("/region/{id}", put(update_region).delete(delete_region))
            .route("/walkdifficulty", post(create_walk_difficulty))
            .route(
                "/walkdifficulty/{id}",
                put(update_walk_difficulty).delete(delete_walk_difficulty),
            )
            .route("/walk", post(create_walk))
            .route("/walk/{id}", put(update_walk).delete(delete_walk)),
        state,
        Role::Writer,
    );

    Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(login))
        .merge(reads)
        .merge(writes)
}
