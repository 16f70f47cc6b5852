//! Route definitions for the `/venues` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// Routes mounted at `/venues`.
///
/// ```text
/// GET    /               -> list
/// POST   /search         -> search
/// GET    /create         -> create_form
/// POST   /create         -> create
/// GET    /{id}           -> get_by_id
/// DELETE /{id}           -> delete
/// GET    /{id}/edit      -> edit_form
/// POST   /{id}/edit      -> edit
/// POST   /{id}/delete    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue::list))
        .route("/search", post(venue::search))
        .route("/create", get(venue::create_form).post(venue::create))
        .route("/{id}", get(venue::get_by_id).delete(venue::delete))
        .route("/{id}/edit", get(venue::edit_form).post(venue::edit))
        .route("/{id}/delete", post(venue::delete))
}
