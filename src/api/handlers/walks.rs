/*
 * Responsibility
 * - /walk CRUD handlers
 * - both references are resolved on create and update; reference errors
 *   accumulate with the field checks instead of short-circuiting
 */
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
};
use uuid::Uuid;

use crate::{
    api::dto::walks::{AddWalkRequest, UpdateWalkRequest, WalkResponse},
    error::{AppError, FieldError},
    repos::walk_repo::{NewWalk, WalkRow},
    state::AppState,
};

fn row_to_response(row: WalkRow) -> WalkResponse {
    WalkResponse {
        id: row.walk_id,
        name: row.name,
        description: row.description,
        length: row.length,
        region_id: row.region_id,
        walk_difficulty_id: row.walk_difficulty_id,
    }
}

/// Resolve both references, pushing one field error per missing row.
async fn check_references(
    state: &AppState,
    region_id: Uuid,
    walk_difficulty_id: Uuid,
    errors: &mut Vec<FieldError>,
) -> Result<(), AppError> {
    if state.regions.get_by_id(region_id).await?.is_none() {
        errors.push(FieldError::new("RegionId", "RegionId does not exist."));
    }
    if state
        .difficulties
        .get_by_id(walk_difficulty_id)
        .await?
        .is_none()
    {
        errors.push(FieldError::new(
            "WalkDifficultyId",
            "WalkDifficultyId does not exist.",
        ));
    }
    Ok(())
}

pub async fn list_walks(State(state): State<AppState>) -> Result<Json<Vec<WalkResponse>>, AppError> {
    let rows = state.walks.get_all().await?;

    Ok(Json(rows.into_iter().map(row_to_response).collect()))
}

pub async fn get_walk(
    State(state): State<AppState>,
    Path(walk_id): Path<Uuid>,
) -> Result<Json<WalkResponse>, AppError> {
    let row = state
        .walks
        .get_by_id(walk_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn create_walk(
    State(state): State<AppState>,
    req: Result<Json<AddWalkRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<WalkResponse>), AppError> {
    let Json(req) = req.map_err(|_| AppError::malformed_body())?;

    let mut errors = req.field_errors();
    check_references(&state, req.region_id, req.walk_difficulty_id, &mut errors).await?;
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let row = state
        .walks
        .add(NewWalk {
            name: req.name,
            description: req.description,
            length: req.length,
            region_id: req.region_id,
            walk_difficulty_id: req.walk_difficulty_id,
        })
        .await?;

    let location = format!("/walk/{}", row.walk_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(row_to_response(row)),
    ))
}

pub async fn update_walk(
    State(state): State<AppState>,
    Path(walk_id): Path<Uuid>,
    req: Result<Json<UpdateWalkRequest>, JsonRejection>,
) -> Result<Json<WalkResponse>, AppError> {
    let Json(req) = req.map_err(|_| AppError::malformed_body())?;

    let mut errors = req.field_errors();
    check_references(&state, req.region_id, req.walk_difficulty_id, &mut errors).await?;
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let row = state
        .walks
        .update(
            walk_id,
            NewWalk {
                name: req.name,
                description: req.description,
                length: req.length,
                region_id: req.region_id,
                walk_difficulty_id: req.walk_difficulty_id,
            },
        )
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn delete_walk(
    State(state): State<AppState>,
    Path(walk_id): Path<Uuid>,
) -> Result<Json<WalkResponse>, AppError> {
    let row = state
        .walks
        .delete(walk_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}
