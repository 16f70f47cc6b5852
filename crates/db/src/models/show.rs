//! Show entity model, DTOs and joined projections.
//!
//! Projections serialize `start_time` as display text
//! (see [`fyyur_core::shows::START_TIME_FORMAT`]); the raw timestamp stays
//! available in Rust for partitioning.

use fyyur_core::shows::{format_start_time, Scheduled};
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for booking a show.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

/// A show as seen from its venue: who plays and when.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(serialize_with = "serialize_start_time")]
    pub start_time: Timestamp,
}

/// A show as seen from its artist: where they play and when.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    #[serde(serialize_with = "serialize_start_time")]
    pub start_time: Timestamp,
}

/// A row of the `/shows` listing, joined with both sides.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(serialize_with = "serialize_start_time")]
    pub start_time: Timestamp,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

fn serialize_start_time<S: Serializer>(start_time: &Timestamp, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_start_time(*start_time))
}
