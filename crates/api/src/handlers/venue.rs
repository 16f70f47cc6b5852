//! Handlers for the `/venues` resource.
//!
//! Reads go through a pooled connection. Every write runs inside one
//! transaction from [`fyyur_db::begin`] that is committed or rolled back by
//! [`complete`] before the response is built.

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::{Form, WithRejection};
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::listing::Area;
use fyyur_core::types::DbId;
use fyyur_db::models::venue::{Venue, VenueDetail, VenueSummary};
use fyyur_db::repositories::{ShowRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::forms::{SearchForm, VenueForm};
use crate::handlers::{complete, FormOptions, SearchPage};
use crate::response::{DataResponse, SeeOther};
use crate::state::AppState;

type VenuePath = WithRejection<Path<DbId>, AppError>;
type VenueFormBody = WithRejection<Form<VenueForm>, AppError>;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Venue",
        id,
    })
}

/// GET /venues
///
/// Every venue grouped by (city, state), each with its upcoming-show count.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Area<VenueSummary>>>>> {
    let mut conn = state.pool.acquire().await?;
    let areas = VenueRepo::list_areas(&mut conn, Utc::now()).await?;
    Ok(Json(DataResponse { data: areas }))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<SearchForm>, AppError>,
) -> AppResult<Json<DataResponse<SearchPage<VenueSummary>>>> {
    let mut conn = state.pool.acquire().await?;
    let results = VenueRepo::search(&mut conn, form.term(), Utc::now()).await?;
    tracing::debug!(term = form.term(), count = results.count, "Venue search");

    Ok(Json(DataResponse {
        data: SearchPage {
            search_term: form.search_term,
            results,
        },
    }))
}

/// GET /venues/{id}
///
/// The venue with its shows split into upcoming and past.
pub async fn get_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): VenuePath,
) -> AppResult<Json<DataResponse<VenueDetail>>> {
    let mut conn = state.pool.acquire().await?;
    let detail = VenueRepo::find_detail(&mut conn, id, Utc::now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /venues/create
pub async fn create_form() -> Json<DataResponse<FormOptions>> {
    Json(DataResponse {
        data: FormOptions::default(),
    })
}

/// POST /venues/create
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Form(form), _): VenueFormBody,
) -> AppResult<SeeOther<Venue>> {
    let input = form.into_input()?;

    let mut tx = fyyur_db::begin(&state.pool).await?;
    let result = VenueRepo::create(&mut tx, &input).await;
    let venue = complete(tx, result, "create venue").await?;

    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");
    let message = format!("Venue {} was successfully listed!", venue.name);
    Ok(SeeOther::new("/venues", message, venue))
}

/// GET /venues/{id}/edit
///
/// The stored venue, used to pre-fill the edit form.
pub async fn edit_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): VenuePath,
) -> AppResult<Json<DataResponse<Venue>>> {
    let mut conn = state.pool.acquire().await?;
    let venue = VenueRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: venue }))
}

/// POST /venues/{id}/edit
///
/// Replaces every editable field with the submitted values.
pub async fn edit(
    State(state): State<AppState>,
    WithRejection(Path(id), _): VenuePath,
    WithRejection(Form(form), _): VenueFormBody,
) -> AppResult<SeeOther<Venue>> {
    let input = form.into_input()?;

    let mut tx = fyyur_db::begin(&state.pool).await?;
    let result = VenueRepo::update(&mut tx, id, &input)
        .await
        .map_err(AppError::from)
        .and_then(|venue| venue.ok_or_else(|| not_found(id)));
    let venue = complete(tx, result, "edit venue").await?;

    tracing::info!(venue_id = venue.id, "Venue updated");
    let message = format!("Venue {} was successfully updated!", venue.name);
    Ok(SeeOther::new(format!("/venues/{id}"), message, venue))
}

/// DELETE /venues/{id} and POST /venues/{id}/delete
///
/// Refuses with 409 while shows are still booked at the venue.
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path(id), _): VenuePath,
) -> AppResult<SeeOther<()>> {
    let mut tx = fyyur_db::begin(&state.pool).await?;
    let result = async {
        let booked = ShowRepo::count_for_venue(&mut tx, id).await?;
        if booked > 0 {
            return Err(AppError::Core(CoreError::Constraint(format!(
                "Venue {id} still has {booked} show(s) booked and cannot be deleted"
            ))));
        }
        if !VenueRepo::delete(&mut tx, id).await? {
            return Err(not_found(id));
        }
        Ok::<(), AppError>(())
    }
    .await;
    complete(tx, result, "delete venue").await?;

    tracing::info!(venue_id = id, "Venue deleted");
    Ok(SeeOther::message_only(
        "/",
        "The Venue has been successfully deleted!",
    ))
}
