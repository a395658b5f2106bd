//! Repository for the `skills` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{CreateSkill, Skill, SkillCategory, SkillDocument};
use crate::DbError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sort_order, category, name, created_at, updated_at";

/// Provides CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// List all skills across every category, sorted ascending by
    /// `sort_order`. The client partitions by category.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY sort_order ASC");
        let docs = sqlx::query_as::<_, SkillDocument>(&query)
            .fetch_all(pool)
            .await?;
        docs.into_iter()
            .map(|doc| Skill::try_from(doc).map_err(DbError::from))
            .collect()
    }

    /// List the skills of one category, sorted ascending by `sort_order`.
    pub async fn list_by_category(
        pool: &PgPool,
        category: SkillCategory,
    ) -> Result<Vec<Skill>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE category = $1
             ORDER BY sort_order ASC"
        );
        let docs = sqlx::query_as::<_, SkillDocument>(&query)
            .bind(category.as_str())
            .fetch_all(pool)
            .await?;
        docs.into_iter()
            .map(|doc| Skill::try_from(doc).map_err(DbError::from))
            .collect()
    }

    /// Insert a new skill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, DbError> {
        let query = format!(
            "INSERT INTO skills (sort_order, category, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, SkillDocument>(&query)
            .bind(input.order)
            .bind(input.category.as_str())
            .bind(&input.name)
            .fetch_one(pool)
            .await?;
        Ok(Skill::try_from(doc)?)
    }

    /// Full-document replace keyed by id.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(pool: &PgPool, entity: &Skill) -> Result<Option<Skill>, DbError> {
        let query = format!(
            "UPDATE skills SET
                sort_order = $2,
                category = $3,
                name = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, SkillDocument>(&query)
            .bind(entity.id)
            .bind(entity.order)
            .bind(entity.category.as_str())
            .bind(&entity.name)
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| Skill::try_from(doc).map_err(DbError::from))
            .transpose()
    }

    /// Delete a skill by id, returning the deleted entity.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Skill>, DbError> {
        let query = format!("DELETE FROM skills WHERE id = $1 RETURNING {COLUMNS}");
        let doc = sqlx::query_as::<_, SkillDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| Skill::try_from(doc).map_err(DbError::from))
            .transpose()
    }
}
