/*
 * Responsibility
 * - /walkdifficulty CRUD handlers
 * - delete is refused while a walk still references the difficulty
 */
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
};
use uuid::Uuid;

use crate::{
    api::dto::walk_difficulties::{
        AddWalkDifficultyRequest, UpdateWalkDifficultyRequest, WalkDifficultyResponse,
    },
    error::{AppError, FieldError},
    repos::walk_difficulty_repo::{NewWalkDifficulty, WalkDifficultyRow},
    state::AppState,
};

fn row_to_response(row: WalkDifficultyRow) -> WalkDifficultyResponse {
    WalkDifficultyResponse {
        id: row.walk_difficulty_id,
        code: row.code,
    }
}

pub async fn list_walk_difficulties(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkDifficultyResponse>>, AppError> {
    let rows = state.difficulties.get_all().await?;

    Ok(Json(rows.into_iter().map(row_to_response).collect()))
}

pub async fn get_walk_difficulty(
    State(state): State<AppState>,
    Path(walk_difficulty_id): Path<Uuid>,
) -> Result<Json<WalkDifficultyResponse>, AppError> {
    let row = state
        .difficulties
        .get_by_id(walk_difficulty_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn create_walk_difficulty(
    State(state): State<AppState>,
    req: Result<Json<AddWalkDifficultyRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<WalkDifficultyResponse>), AppError> {
    let Json(req) = req.map_err(|_| AppError::malformed_body())?;
    req.validate().map_err(AppError::Validation)?;

    let row = state
        .difficulties
        .add(NewWalkDifficulty { code: req.code })
        .await?;

    let location = format!("/walkdifficulty/{}", row.walk_difficulty_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(row_to_response(row)),
    ))
}

pub async fn update_walk_difficulty(
    State(state): State<AppState>,
    Path(walk_difficulty_id): Path<Uuid>,
    req: Result<Json<UpdateWalkDifficultyRequest>, JsonRejection>,
) -> Result<Json<WalkDifficultyResponse>, AppError> {
    let Json(req) = req.map_err(|_| AppError::malformed_body())?;
    req.validate().map_err(AppError::Validation)?;

    let row = state
        .difficulties
        .update(walk_difficulty_id, NewWalkDifficulty { code: req.code })
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn delete_walk_difficulty(
    State(state): State<AppState>,
    Path(walk_difficulty_id): Path<Uuid>,
) -> Result<Json<WalkDifficultyResponse>, AppError> {
    if state.walks.references_difficulty(walk_difficulty_id).await? {
        return Err(AppError::Conflict(FieldError::new(
            "WalkDifficultyId",
            "Walk difficulty is still referenced by a walk.",
        )));
    }

    let row = state
        .difficulties
        .delete(walk_difficulty_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}
