//! Route definitions for the `/educations` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::education;
use crate::state::AppState;

/// Routes mounted at `/educations`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(education::list).post(education::create))
        .route("/{id}", put(education::update).delete(education::delete))
}
