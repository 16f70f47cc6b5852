//! Handler for the home page.

use axum::extract::State;
use axum::Json;
use fyyur_db::models::RecentListing;
use fyyur_db::repositories::{ArtistRepo, VenueRepo, DEFAULT_RECENT_LIMIT};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Recently listed venues and artists.
#[derive(Debug, Serialize)]
pub struct HomeSummary {
    pub recent_venues: Vec<RecentListing>,
    pub recent_artists: Vec<RecentListing>,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Json<DataResponse<HomeSummary>>> {
    let mut conn = state.pool.acquire().await?;
    let recent_venues = VenueRepo::recent(&mut conn, DEFAULT_RECENT_LIMIT).await?;
    let recent_artists = ArtistRepo::recent(&mut conn, DEFAULT_RECENT_LIMIT).await?;

    Ok(Json(DataResponse {
        data: HomeSummary {
            recent_venues,
            recent_artists,
        },
    }))
}
