//! Repository for the `demos` table, including the embedded gallery.
//!
//! Gallery mutations operate directly on the `gallery` jsonb column so
//! an append or removal is a single statement; the blob-store side of
//! the two-phase image operations lives in the API layer.

use folio_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::demo::{CreateDemo, Demo, DemoDocument, GalleryImage};
use crate::DbError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, sort_order, title, description, technologies, gallery, links, created_at, updated_at";

/// Provides CRUD and gallery operations for demos.
pub struct DemoRepo;

impl DemoRepo {
    /// List all demos, sorted ascending by `sort_order`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Demo>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM demos ORDER BY sort_order ASC");
        let docs = sqlx::query_as::<_, DemoDocument>(&query)
            .fetch_all(pool)
            .await?;
        docs.into_iter()
            .map(|doc| Demo::try_from(doc).map_err(DbError::from))
            .collect()
    }

    /// Insert a new demo, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDemo) -> Result<Demo, DbError> {
        let query = format!(
            "INSERT INTO demos (sort_order, title, description, technologies, gallery, links)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, DemoDocument>(&query)
            .bind(input.order)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.technologies)
            .bind(Json(&input.gallery))
            .bind(Json(&input.links))
            .fetch_one(pool)
            .await?;
        Ok(Demo::try_from(doc)?)
    }

    /// Full-document replace keyed by id.
    ///
    /// Returns `None` if no row with the given id exists. The gallery is
    /// replaced wholesale along with every other field.
    pub async fn update(pool: &PgPool, entity: &Demo) -> Result<Option<Demo>, DbError> {
        let query = format!(
            "UPDATE demos SET
                sort_order = $2,
                title = $3,
                description = $4,
                technologies = $5,
                gallery = $6,
                links = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, DemoDocument>(&query)
            .bind(entity.id)
            .bind(entity.order)
            .bind(&entity.title)
            .bind(&entity.description)
            .bind(&entity.technologies)
            .bind(Json(&entity.gallery))
            .bind(Json(&entity.links))
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| Demo::try_from(doc).map_err(DbError::from))
            .transpose()
    }

    /// Delete a demo by id, returning the deleted entity.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Demo>, DbError> {
        let query = format!("DELETE FROM demos WHERE id = $1 RETURNING {COLUMNS}");
        let doc = sqlx::query_as::<_, DemoDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| Demo::try_from(doc).map_err(DbError::from))
            .transpose()
    }

    /// Check whether a demo exists. Used before writing an image to
    /// blob storage, so a bad demo id never uploads an orphan object.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM demos WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Append a gallery entry to a demo, returning the updated demo.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn push_gallery_image(
        pool: &PgPool,
        id: DbId,
        image: &GalleryImage,
    ) -> Result<Option<Demo>, DbError> {
        let query = format!(
            "UPDATE demos SET
                gallery = COALESCE(gallery, '[]'::jsonb) || $2::jsonb,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, DemoDocument>(&query)
            .bind(id)
            .bind(Json(image))
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| Demo::try_from(doc).map_err(DbError::from))
            .transpose()
    }

    /// Remove the gallery entry with the given image id, returning the
    /// updated demo.
    ///
    /// Returns `None` if no row with the given demo id exists. Removing
    /// an image id that is not in the gallery is a no-op on the row.
    pub async fn pull_gallery_image(
        pool: &PgPool,
        id: DbId,
        image_id: &str,
    ) -> Result<Option<Demo>, DbError> {
        // jsonb_agg over the remaining elements, ordered by their
        // original array position so the sequence is preserved by
        // contract, not by evaluation order. COALESCE keeps an empty
        // gallery as [] rather than NULL.
        let query = format!(
            "UPDATE demos SET
                gallery = COALESCE(
                    (SELECT jsonb_agg(entry ORDER BY position)
                     FROM jsonb_array_elements(COALESCE(gallery, '[]'::jsonb))
                          WITH ORDINALITY AS elems(entry, position)
                     WHERE entry->>'id' <> $2),
                    '[]'::jsonb
                ),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let doc = sqlx::query_as::<_, DemoDocument>(&query)
            .bind(id)
            .bind(image_id)
            .fetch_optional(pool)
            .await?;
        doc.map(|doc| Demo::try_from(doc).map_err(DbError::from))
            .transpose()
    }
}
