pub mod demo;
pub mod education;
pub mod health;
pub mod project;
pub mod skill;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /educations                              list, create
/// /educations/{id}                         update, delete
///
/// /projects                                list, create
/// /projects/{id}                           update, delete (cascades bullet points)
/// /projects/{project_id}/bulletpoints      list, create
/// /projects/{project_id}/bulletpoints/{id} update, delete
///
/// /skills                                  list (optional ?category=), create
/// /skills/{id}                             update, delete
///
/// /demos                                   list, create
/// /demos/{id}                              update, delete
/// /demos/{id}/images                       upload image (multipart, field `file`)
/// /demos/{id}/images/{image_id}            delete image
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/educations", education::router())
        .nest("/projects", project::router())
        .nest("/skills", skill::router())
        .nest("/demos", demo::router())
}
