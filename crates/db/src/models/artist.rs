//! Artist entity model, DTOs and read views.

use fyyur_core::shows::Partitioned;
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::show::ArtistShow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an artist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Edits replace every column, so they carry the same fields as a create.
pub type UpdateArtist = CreateArtist;

/// An artist in the artist listing or in search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Artist detail page: the stored artist plus its shows split at request time.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows_count: usize,
    pub past_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(artist: Artist, shows: Partitioned<ArtistShow>) -> Self {
        let upcoming_shows_count = shows.upcoming_count();
        let past_shows_count = shows.past_count();
        Self {
            artist,
            upcoming_shows: shows.upcoming,
            past_shows: shows.past,
            upcoming_shows_count,
            past_shows_count,
        }
    }
}
