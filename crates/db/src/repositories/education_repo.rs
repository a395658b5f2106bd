//! Repository for the `educations` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::education::{CreateEducation, Education, EducationDocument};
use crate::DbError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, sort_order, school, degree, graduation_year, gpa, created_at, updated_at";

/// Provides CRUD operations for education entries.
pub struct EducationRepo;

impl EducationRepo {
    /// List all education entries, sorted ascending by `sort_order`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Education>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM educations ORDER BY sort_order ASC");
        let docs = sqlx::query_as::<_, EducationDocument>(&query)
            .fetch_all(pool)
            .await?;
        docs.into_iter()
            .map(|doc| Education::try_from(doc).map_err(DbError::from))
            .collect()
    }

    /// Insert a new education entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEducation) -> Result<Education, DbError> {
        let query = format!(
            "INSERT INTO educations (sort_order, school, degree, graduation_year, gpa)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, EducationDocument>(&query)
            .bind(input.order)
            .bind(&input.school)
            .bind(&input.degree)
            .bind(input.graduation_year)
            .bind(input.gpa)
            .fetch_one(pool)
            .await?;
        Ok(Education::try_from(doc)?)
    }

    /// Full-document replace keyed by id.
    ///
    /// Returns `None` if no row with the given id exists. Does not
    /// touch sibling rows.
    pub async fn update(pool: &PgPool, entity: &Education) -> Result<Option<Education>, DbError> {
        let query = format!(
            "UPDATE educations SET
                sort_order = $2,
                school = $3,
                degree = $4,
                graduation_year = $5,
                gpa = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, EducationDocument>(&query)
            .bind(entity.id)
            .bind(entity.order)
            .bind(&entity.school)
            .bind(&entity.degree)
            .bind(entity.graduation_year)
            .bind(entity.gpa)
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| Education::try_from(doc).map_err(DbError::from))
            .transpose()
    }

    /// Delete an education entry by id, returning the deleted entity.
    ///
    /// Returns `None` if no row matched. Remaining siblings keep their
    /// `sort_order`; the caller reindexes.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Education>, DbError> {
        let query = format!("DELETE FROM educations WHERE id = $1 RETURNING {COLUMNS}");
        let doc = sqlx::query_as::<_, EducationDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| Education::try_from(doc).map_err(DbError::from))
            .transpose()
    }
}
