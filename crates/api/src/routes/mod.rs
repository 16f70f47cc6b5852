pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the booking route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                 home (recent venues and artists)
///
/// /venues                           list grouped by area
/// /venues/search                    name search (POST)
/// /venues/create                    form options, create
/// /venues/{id}                      detail, delete
/// /venues/{id}/edit                 current values, edit
/// /venues/{id}/delete               delete (POST alias)
///
/// /artists                          list
/// /artists/search                   name search (POST)
/// /artists/create                   form options, create
/// /artists/{id}                     detail
/// /artists/{id}/edit                current values, edit
///
/// /shows                            list
/// /shows/create                     venue/artist choices, create
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
