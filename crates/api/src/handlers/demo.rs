//! Handlers for the `/demos` resource and its image gallery subresource.
//!
//! Gallery operations are two-phase (blob store + jsonb metadata) with no
//! rollback. Addition writes the blob first, so a metadata failure leaves
//! an orphan object; removal deletes the blob first, so a metadata failure
//! leaves a dangling gallery reference. Neither window is corrected
//! automatically.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use folio_cloud::S3Store;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::demo::{CreateDemo, Demo, GalleryImage};
use folio_db::repositories::DemoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn demo_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Demo", id })
}

/// GET /api/v1/demos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Demo>>> {
    let demos = DemoRepo::list(&state.pool).await?;
    Ok(Json(demos))
}

/// POST /api/v1/demos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDemo>,
) -> AppResult<Json<Demo>> {
    let demo = DemoRepo::create(&state.pool, &input).await?;
    Ok(Json(demo))
}

/// PUT /api/v1/demos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<Demo>,
) -> AppResult<Json<Demo>> {
    input.id = id;
    let demo = DemoRepo::update(&state.pool, &input)
        .await?
        .ok_or_else(|| demo_not_found(id))?;
    Ok(Json(demo))
}

/// DELETE /api/v1/demos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Demo>> {
    let demo = DemoRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| demo_not_found(id))?;
    Ok(Json(demo))
}

/// POST /api/v1/demos/{id}/images
///
/// Multipart upload with the image under the `file` field. Generates a
/// fresh object key, stores the blob, then appends `{id, link}` to the
/// demo's gallery. If the blob write fails the demo is not mutated.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<Demo>> {
    let mut file: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid image provided: {e}")))?;
            file = Some((bytes.to_vec(), content_type));
        }
    }

    let (bytes, content_type) =
        file.ok_or_else(|| AppError::BadRequest("No image provided".to_string()))?;

    // Check the demo before touching the blob store so a bad id never
    // uploads an orphan object.
    if !DemoRepo::exists(&state.pool, id).await? {
        return Err(demo_not_found(id));
    }

    let key = S3Store::generate_key();
    state.s3.put_object(&key, bytes, &content_type).await?;

    let image = GalleryImage {
        link: state.s3.public_url(&key),
        id: key,
    };

    tracing::info!(demo_id = id, image_id = %image.id, "Uploaded gallery image");

    let demo = DemoRepo::push_gallery_image(&state.pool, id, &image)
        .await?
        .ok_or_else(|| demo_not_found(id))?;
    Ok(Json(demo))
}

/// DELETE /api/v1/demos/{id}/images/{image_id}
///
/// Deletes the blob first, then removes the gallery entry. A metadata
/// failure after a successful blob delete leaves the entry dangling.
pub async fn delete_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(DbId, String)>,
) -> AppResult<Json<Demo>> {
    if image_id.is_empty() {
        return Err(AppError::BadRequest("No image ID provided".to_string()));
    }

    if !DemoRepo::exists(&state.pool, id).await? {
        return Err(demo_not_found(id));
    }

    state.s3.delete_object(&image_id).await?;

    tracing::info!(demo_id = id, image_id = %image_id, "Deleted gallery image");

    let demo = DemoRepo::pull_gallery_image(&state.pool, id, &image_id)
        .await?
        .ok_or_else(|| demo_not_found(id))?;
    Ok(Json(demo))
}
