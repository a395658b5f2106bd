//! Handlers for the `/educations` resource.

use axum::extract::{Path, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::education::{validate_education, CreateEducation, Education};
use folio_db::repositories::EducationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/educations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Education>>> {
    let educations = EducationRepo::list(&state.pool).await?;
    Ok(Json(educations))
}

/// POST /api/v1/educations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEducation>,
) -> AppResult<Json<Education>> {
    validate_education(input.order, input.gpa)?;
    let education = EducationRepo::create(&state.pool, &input).await?;
    Ok(Json(education))
}

/// PUT /api/v1/educations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<Education>,
) -> AppResult<Json<Education>> {
    // The path id is authoritative.
    input.id = id;
    validate_education(input.order, input.gpa)?;
    let education = EducationRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Education",
            id,
        }))?;
    Ok(Json(education))
}

/// DELETE /api/v1/educations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Education>> {
    let education = EducationRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Education",
            id,
        }))?;
    Ok(Json(education))
}
