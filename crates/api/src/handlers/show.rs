//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::{Form, WithRejection};
use fyyur_db::models::show::{Show, ShowListing};
use fyyur_db::models::EntityRef;
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::forms::ShowForm;
use crate::handlers::complete;
use crate::response::{DataResponse, SeeOther};
use crate::state::AppState;

/// Venues and artists a show can be booked with.
#[derive(Debug, Serialize)]
pub struct ShowFormOptions {
    pub venues: Vec<EntityRef>,
    pub artists: Vec<EntityRef>,
}

/// GET /shows
///
/// Every show with its venue and artist names, earliest first.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ShowListing>>>> {
    let mut conn = state.pool.acquire().await?;
    let shows = ShowRepo::list(&mut conn).await?;
    Ok(Json(DataResponse { data: shows }))
}

/// GET /shows/create
pub async fn create_form(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ShowFormOptions>>> {
    let mut conn = state.pool.acquire().await?;
    let venues = VenueRepo::choices(&mut conn).await?;
    let artists = ArtistRepo::choices(&mut conn).await?;
    Ok(Json(DataResponse {
        data: ShowFormOptions { venues, artists },
    }))
}

/// POST /shows/create
///
/// An unknown venue or artist, or a duplicate booking, is a 409.
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<ShowForm>, AppError>,
) -> AppResult<SeeOther<Show>> {
    let input = form.into_input()?;

    let mut tx = fyyur_db::begin(&state.pool).await?;
    let result = ShowRepo::create(&mut tx, &input).await;
    let show = complete(tx, result, "create show").await?;

    tracing::info!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        "Show created"
    );
    Ok(SeeOther::new("/shows", "Show was successfully listed!", show))
}
