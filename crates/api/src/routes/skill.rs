//! Route definitions for the `/skills` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::skill;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /       -> list (optional ?category=)
/// POST   /       -> create
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skill::list).post(skill::create))
        .route("/{id}", put(skill::update).delete(skill::delete))
}
