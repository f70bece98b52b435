/*
 * Responsibility
 * - /region CRUD handlers
 * - validate → repo → map the row to the wire record
 * - delete is refused while a walk still references the region
 */
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
};
use uuid::Uuid;

use crate::{
    api::dto::regions::{AddRegionRequest, RegionResponse, UpdateRegionRequest},
    error::{AppError, FieldError},
    repos::region_repo::{NewRegion, RegionRow},
    state::AppState,
};

fn row_to_response(row: RegionRow) -> RegionResponse {
    RegionResponse {
        id: row.region_id,
        code: row.code,
        name: row.name,
        area: row.area,
        lat: row.lat,
        long: row.long,
        population: row.population,
    }
}

pub async fn list_regions(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegionResponse>>, AppError> {
    let rows = state.regions.get_all().await?;

    Ok(Json(rows.into_iter().map(row_to_response).collect()))
}

pub async fn get_region(
    State(state): State<AppState>,
    Path(region_id): Path<Uuid>,
) -> Result<Json<RegionResponse>, AppError> {
    let row = state
        .regions
        .get_by_id(region_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn create_region(
    State(state): State<AppState>,
    req: Result<Json<AddRegionRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<RegionResponse>), AppError> {
    let Json(req) = req.map_err(|_| AppError::malformed_body())?;
    req.validate().map_err(AppError::Validation)?;

    let row = state
        .regions
        .add(NewRegion {
            code: req.code,
            name: req.name,
            area: req.area,
            lat: req.lat,
            long: req.long,
            population: req.population,
        })
        .await?;

    let location = format!("/region/{}", row.region_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(row_to_response(row)),
    ))
}

pub async fn update_region(
    State(state): State<AppState>,
    Path(region_id): Path<Uuid>,
    req: Result<Json<UpdateRegionRequest>, JsonRejection>,
) -> Result<Json<RegionResponse>, AppError> {
    let Json(req) = req.map_err(|_| AppError::malformed_body())?;
    req.validate().map_err(AppError::Validation)?;

    let row = state
        .regions
        .update(
            region_id,
            NewRegion {
                code: req.code,
                name: req.name,
                area: req.area,
                lat: req.lat,
                long: req.long,
                population: req.population,
            },
        )
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}

pub async fn delete_region(
    State(state): State<AppState>,
    Path(region_id): Path<Uuid>,
) -> Result<Json<RegionResponse>, AppError> {
    // Restrict-delete: a referenced region stays.
    if state.walks.references_region(region_id).await? {
        return Err(AppError::Conflict(FieldError::new(
            "RegionId",
            "Region is still referenced by a walk.",
        )));
    }

    let row = state
        .regions
        .delete(region_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row_to_response(row)))
}
