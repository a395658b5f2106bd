//! Route definitions for the `/projects` resource.
//!
//! Also nests the bullet point subresource under
//! `/projects/{project_id}/bulletpoints`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{bullet_point, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{project_id}/bulletpoints         -> list_by_project
/// POST   /{project_id}/bulletpoints         -> create
/// PUT    /{project_id}/bulletpoints/{id}    -> update
/// DELETE /{project_id}/bulletpoints/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let bullet_point_routes = Router::new()
        .route(
            "/",
            get(bullet_point::list_by_project).post(bullet_point::create),
        )
        .route(
            "/{id}",
            put(bullet_point::update).delete(bullet_point::delete),
        );

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", put(project::update).delete(project::delete))
        .nest("/{project_id}/bulletpoints", bullet_point_routes)
}
