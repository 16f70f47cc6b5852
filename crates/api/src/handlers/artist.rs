//! Handlers for the `/artists` resource.

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::{Form, WithRejection};
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::types::DbId;
use fyyur_db::models::artist::{Artist, ArtistDetail, ArtistSummary};
use fyyur_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::forms::{ArtistForm, SearchForm};
use crate::handlers::{complete, FormOptions, SearchPage};
use crate::response::{DataResponse, SeeOther};
use crate::state::AppState;

type ArtistPath = WithRejection<Path<DbId>, AppError>;
type ArtistFormBody = WithRejection<Form<ArtistForm>, AppError>;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

/// GET /artists
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ArtistSummary>>>> {
    let mut conn = state.pool.acquire().await?;
    let artists = ArtistRepo::list(&mut conn, Utc::now()).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<SearchForm>, AppError>,
) -> AppResult<Json<DataResponse<SearchPage<ArtistSummary>>>> {
    let mut conn = state.pool.acquire().await?;
    let results = ArtistRepo::search(&mut conn, form.term(), Utc::now()).await?;
    tracing::debug!(term = form.term(), count = results.count, "Artist search");

    Ok(Json(DataResponse {
        data: SearchPage {
            search_term: form.search_term,
            results,
        },
    }))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ArtistPath,
) -> AppResult<Json<DataResponse<ArtistDetail>>> {
    let mut conn = state.pool.acquire().await?;
    let detail = ArtistRepo::find_detail(&mut conn, id, Utc::now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /artists/create
pub async fn create_form() -> Json<DataResponse<FormOptions>> {
    Json(DataResponse {
        data: FormOptions::default(),
    })
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Form(form), _): ArtistFormBody,
) -> AppResult<SeeOther<Artist>> {
    let input = form.into_input()?;

    let mut tx = fyyur_db::begin(&state.pool).await?;
    let result = ArtistRepo::create(&mut tx, &input).await;
    let artist = complete(tx, result, "create artist").await?;

    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
    let message = format!("Artist {} was successfully listed!", artist.name);
    Ok(SeeOther::new("/artists", message, artist))
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ArtistPath,
) -> AppResult<Json<DataResponse<Artist>>> {
    let mut conn = state.pool.acquire().await?;
    let artist = ArtistRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: artist }))
}

/// POST /artists/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ArtistPath,
    WithRejection(Form(form), _): ArtistFormBody,
) -> AppResult<SeeOther<Artist>> {
    let input = form.into_input()?;

    let mut tx = fyyur_db::begin(&state.pool).await?;
    let result = ArtistRepo::update(&mut tx, id, &input)
        .await
        .map_err(AppError::from)
        .and_then(|artist| artist.ok_or_else(|| not_found(id)));
    let artist = complete(tx, result, "edit artist").await?;

    tracing::info!(artist_id = artist.id, "Artist updated");
    let message = format!("Artist {} was successfully updated!", artist.name);
    Ok(SeeOther::new(format!("/artists/{id}"), message, artist))
}
