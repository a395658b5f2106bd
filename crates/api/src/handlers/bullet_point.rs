//! Handlers for the `/projects/{project_id}/bulletpoints` subresource.

use axum::extract::{Path, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::bullet_point::{BulletPoint, CreateBulletPoint};
use folio_db::repositories::BulletPointRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/bulletpoints
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<BulletPoint>>> {
    let bullet_points = BulletPointRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(bullet_points))
}

/// POST /api/v1/projects/{project_id}/bulletpoints
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateBulletPoint>,
) -> AppResult<Json<BulletPoint>> {
    let bullet_point = BulletPointRepo::create(&state.pool, project_id, &input).await?;
    Ok(Json(bullet_point))
}

/// PUT /api/v1/projects/{project_id}/bulletpoints/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(mut input): Json<BulletPoint>,
) -> AppResult<Json<BulletPoint>> {
    // Both path segments are authoritative over the body.
    input.id = id;
    input.project_id = project_id;
    let bullet_point = BulletPointRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BulletPoint",
            id,
        }))?;
    Ok(Json(bullet_point))
}

/// DELETE /api/v1/projects/{project_id}/bulletpoints/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<BulletPoint>> {
    let bullet_point = BulletPointRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BulletPoint",
            id,
        }))?;
    Ok(Json(bullet_point))
}
