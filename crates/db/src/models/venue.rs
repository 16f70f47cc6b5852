//! Venue entity model, DTOs and read views.

use fyyur_core::listing::Located;
use fyyur_core::shows::Partitioned;
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::show::VenueShow;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a venue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

/// Edits replace every column, so they carry the same fields as a create.
pub type UpdateVenue = CreateVenue;

/// A venue in the area listing or in search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    #[serde(skip)]
    pub city: String,
    #[serde(skip)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

impl Located for VenueSummary {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Venue detail page: the stored venue plus its shows split at request time.
///
/// Built once by [`VenueDetail::new`] and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows_count: usize,
    pub past_shows_count: usize,
}

impl VenueDetail {
    pub fn new(venue: Venue, shows: Partitioned<VenueShow>) -> Self {
        let upcoming_shows_count = shows.upcoming_count();
        let past_shows_count = shows.past_count();
        Self {
            venue,
            upcoming_shows: shows.upcoming,
            past_shows: shows.past,
            upcoming_shows_count,
            past_shows_count,
        }
    }
}
