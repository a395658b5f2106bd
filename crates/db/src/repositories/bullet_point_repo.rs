//! Repository for the `bullet_points` table.
//!
//! Bullet points are always read through their owning project's
//! partition; the dense ordering invariant holds per `project_id`.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::bullet_point::{BulletPoint, BulletPointDocument, CreateBulletPoint};
use crate::DbError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sort_order, text, project_id, created_at, updated_at";

/// Provides CRUD operations for bullet points.
pub struct BulletPointRepo;

impl BulletPointRepo {
    /// List a project's bullet points, sorted ascending by `sort_order`.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<BulletPoint>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM bullet_points
             WHERE project_id = $1
             ORDER BY sort_order ASC"
        );
        let docs = sqlx::query_as::<_, BulletPointDocument>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;
        docs.into_iter()
            .map(|doc| BulletPoint::try_from(doc).map_err(DbError::from))
            .collect()
    }

    /// Insert a new bullet point under the given project.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateBulletPoint,
    ) -> Result<BulletPoint, DbError> {
        let query = format!(
            "INSERT INTO bullet_points (sort_order, text, project_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, BulletPointDocument>(&query)
            .bind(input.order)
            .bind(&input.text)
            .bind(project_id)
            .fetch_one(pool)
            .await?;
        Ok(BulletPoint::try_from(doc)?)
    }

    /// Full-document replace keyed by id.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        entity: &BulletPoint,
    ) -> Result<Option<BulletPoint>, DbError> {
        let query = format!(
            "UPDATE bullet_points SET
                sort_order = $2,
                text = $3,
                project_id = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, BulletPointDocument>(&query)
            .bind(entity.id)
            .bind(entity.order)
            .bind(&entity.text)
            .bind(entity.project_id)
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| BulletPoint::try_from(doc).map_err(DbError::from))
            .transpose()
    }

    /// Delete a bullet point by id, returning the deleted entity.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<BulletPoint>, DbError> {
        let query = format!("DELETE FROM bullet_points WHERE id = $1 RETURNING {COLUMNS}");
        let doc = sqlx::query_as::<_, BulletPointDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| BulletPoint::try_from(doc).map_err(DbError::from))
            .transpose()
    }

    /// Count bullet points referencing a project. Used by cascade tests.
    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, DbError> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM bullet_points WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
