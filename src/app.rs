/*
 * Responsibility
 * - config load → dependency build → Router assembly
 * - middleware application (CORS, security headers, transport)
 * - axum::serve() startup
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware::{cors, http, security_headers};
use crate::repos::region_repo::PgRegionRepository;
use crate::repos::user_repo::UserStore;
use crate::repos::walk_difficulty_repo::PgWalkDifficultyRepository;
use crate::repos::walk_repo::PgWalkRepository;
use crate::services::auth::TokenService;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they are not lost when stderr is hidden.
        tracing::error!(?info, "panic");

        // Development fails fast; production keeps serving and logs.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }));
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let auth = Arc::new(TokenService::new(
        &config.jwt_secret,
        config.auth_issuer.clone(),
        config.auth_audience.clone(),
        config.access_token_ttl_seconds,
        config.access_token_leeway_seconds,
    ));

    Ok(AppState::new(
        Arc::new(PgRegionRepository::new(db.clone())),
        Arc::new(PgWalkDifficultyRepository::new(db.clone())),
        Arc::new(PgWalkRepository::new(db)),
        Arc::new(UserStore::with_default_users()),
        auth,
    ))
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = api::routes(state.clone()).with_state(state);

    let router = cors::apply(router, config);
    let router = security_headers::apply(router);
    http::apply(router)
}
