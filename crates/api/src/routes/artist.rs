//! Route definitions for the `/artists` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /               -> list
/// POST   /search         -> search
/// GET    /create         -> create_form
/// POST   /create         -> create
/// GET    /{id}           -> get_by_id
/// GET    /{id}/edit      -> edit_form
/// POST   /{id}/edit      -> edit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artist::list))
        .route("/search", post(artist::search))
        .route("/create", get(artist::create_form).post(artist::create))
        .route("/{id}", get(artist::get_by_id))
        .route("/{id}/edit", get(artist::edit_form).post(artist::edit))
}
