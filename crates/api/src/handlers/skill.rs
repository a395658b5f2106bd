//! Handlers for the `/skills` resource.
//!
//! Skills are ordered per category; the list endpoint optionally narrows
//! to one category so a partition can be fetched pre-sorted.

use axum::extract::{Path, Query, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{CreateSkill, Skill, SkillCategory};
use folio_db::repositories::SkillRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the skill list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListSkillsParams {
    pub category: Option<SkillCategory>,
}

/// GET /api/v1/skills[?category=...]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListSkillsParams>,
) -> AppResult<Json<Vec<Skill>>> {
    let skills = match params.category {
        Some(category) => SkillRepo::list_by_category(&state.pool, category).await?,
        None => SkillRepo::list(&state.pool).await?,
    };
    Ok(Json(skills))
}

/// POST /api/v1/skills
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<Json<Skill>> {
    let skill = SkillRepo::create(&state.pool, &input).await?;
    Ok(Json(skill))
}

/// PUT /api/v1/skills/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<Skill>,
) -> AppResult<Json<Skill>> {
    input.id = id;
    let skill = SkillRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;
    Ok(Json(skill))
}

/// DELETE /api/v1/skills/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Skill>> {
    let skill = SkillRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;
    Ok(Json(skill))
}
