//! Route definitions for the `/demos` resource and its image gallery.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::demo;
use crate::state::AppState;

/// Routes mounted at `/demos`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// POST   /{id}/images             -> upload_image (multipart, field `file`)
/// DELETE /{id}/images/{image_id}  -> delete_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(demo::list).post(demo::create))
        .route("/{id}", put(demo::update).delete(demo::delete))
        .route("/{id}/images", post(demo::upload_image))
        .route("/{id}/images/{image_id}", delete(demo::delete_image))
}
