/*
 * Responsibility
 * - POST /auth/login: credential check → token issuance
 * - every failure cause gets the identical 400 body; a malformed body is
 *   indistinguishable from bad credentials
 */
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::api::dto::auth::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    req: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(req) = req.map_err(|_| AppError::InvalidCredentials)?;

    let user = state
        .users
        .authenticate(&req.username, &req.password)
        .ok_or(AppError::InvalidCredentials)?;

    let access_token = state.auth.issue(user.username, user.role)?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.ttl_seconds(),
    }))
}
