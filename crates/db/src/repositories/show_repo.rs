//! Repository for the `shows` table and its venue/artist joins.

use fyyur_core::types::DbId;
use sqlx::PgConnection;

use crate::models::show::{ArtistShow, CreateShow, Show, ShowListing, VenueShow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, venue_id, artist_id, start_time, created_at";

/// Provides booking and joined listing queries for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Book a show, returning the created row.
    ///
    /// Fails with a foreign key violation if the venue or artist does not
    /// exist, and with a unique violation if the same pair is already booked
    /// at the same time.
    pub async fn create(conn: &mut PgConnection, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (venue_id, artist_id, start_time) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .bind(input.start_time)
            .fetch_one(conn)
            .await
    }

    /// Find a show by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Every show joined with its venue and artist, earliest first.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, v.id AS venue_id, v.name AS venue_name, \
                    a.id AS artist_id, a.name AS artist_name, \
                    a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id \
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(conn)
        .await
    }

    /// Shows at one venue, projected to the performing artist.
    pub async fn list_for_venue(
        conn: &mut PgConnection,
        venue_id: DbId,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT a.id AS artist_id, a.name AS artist_name, \
                    a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(conn)
        .await
    }

    /// Shows by one artist, projected to the hosting venue.
    pub async fn list_for_artist(
        conn: &mut PgConnection,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT v.id AS venue_id, v.name AS venue_name, \
                    v.image_link AS venue_image_link, s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(conn)
        .await
    }

    /// Number of shows booked at a venue, past and upcoming.
    pub async fn count_for_venue(conn: &mut PgConnection, venue_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE venue_id = $1")
            .bind(venue_id)
            .fetch_one(conn)
            .await?;
        Ok(count)
    }
}
