//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectDocument};
use crate::DbError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sort_order, name, link, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects, sorted ascending by `sort_order`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY sort_order ASC");
        let docs = sqlx::query_as::<_, ProjectDocument>(&query)
            .fetch_all(pool)
            .await?;
        docs.into_iter()
            .map(|doc| Project::try_from(doc).map_err(DbError::from))
            .collect()
    }

    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, DbError> {
        let query = format!(
            "INSERT INTO projects (sort_order, name, link)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, ProjectDocument>(&query)
            .bind(input.order)
            .bind(&input.name)
            .bind(&input.link)
            .fetch_one(pool)
            .await?;
        Ok(Project::try_from(doc)?)
    }

    /// Full-document replace keyed by id.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(pool: &PgPool, entity: &Project) -> Result<Option<Project>, DbError> {
        let query = format!(
            "UPDATE projects SET
                sort_order = $2,
                name = $3,
                link = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, ProjectDocument>(&query)
            .bind(entity.id)
            .bind(entity.order)
            .bind(&entity.name)
            .bind(&entity.link)
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| Project::try_from(doc).map_err(DbError::from))
            .transpose()
    }

    /// Delete a project by id, returning the deleted entity.
    ///
    /// The project's bullet points are cascade-deleted best-effort: a
    /// cascade failure is logged and does not roll back or fail the
    /// project deletion.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Project>, DbError> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        let doc = sqlx::query_as::<_, ProjectDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(doc) = doc else {
            return Ok(None);
        };

        match sqlx::query("DELETE FROM bullet_points WHERE project_id = $1")
            .bind(id)
            .execute(pool)
            .await
        {
            Ok(result) => {
                tracing::debug!(
                    project_id = id,
                    deleted = result.rows_affected(),
                    "Cascade-deleted bullet points"
                );
            }
            Err(e) => {
                tracing::error!(
                    project_id = id,
                    error = %e,
                    "Failed to cascade-delete bullet points"
                );
            }
        }

        Ok(Some(Project::try_from(doc)?))
    }
}
