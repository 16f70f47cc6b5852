//! Repository for the `artists` table.

use fyyur_core::search::like_pattern;
use fyyur_core::shows::partition_shows;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgConnection;

use crate::models::artist::{Artist, ArtistDetail, ArtistSummary, CreateArtist, UpdateArtist};
use crate::models::{EntityRef, RecentListing, SearchResults};
use crate::repositories::ShowRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
    website, seeking_venue, seeking_description, created_at, updated_at";

/// Summary columns with the upcoming-show count; `$1` is the reference time.
const SUMMARY_SELECT: &str = "SELECT a.id, a.name, \
        COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
     FROM artists a \
     LEFT JOIN shows s ON s.artist_id = a.id";

/// Provides CRUD and listing queries for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateArtist,
    ) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link, \
                 website, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(conn)
            .await
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Replace every editable column of an artist.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET \
                 name = $2, city = $3, state = $4, phone = $5, genres = $6, \
                 image_link = $7, facebook_link = $8, website = $9, \
                 seeking_venue = $10, seeking_description = $11, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(conn)
            .await
    }

    /// All artists with their upcoming-show counts, ordered by name.
    pub async fn list(
        conn: &mut PgConnection,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} \
             GROUP BY a.id \
             ORDER BY a.name, a.id"
        );
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(now)
            .fetch_all(conn)
            .await
    }

    /// Case-insensitive substring search on the artist name.
    ///
    /// The term is matched literally; an empty term matches every artist.
    pub async fn search(
        conn: &mut PgConnection,
        term: &str,
        now: Timestamp,
    ) -> Result<SearchResults<ArtistSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} \
             WHERE a.name ILIKE $2 ESCAPE '\\' \
             GROUP BY a.id \
             ORDER BY a.name, a.id"
        );
        let artists = sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(now)
            .bind(like_pattern(term))
            .fetch_all(conn)
            .await?;
        Ok(SearchResults::new(artists))
    }

    /// Find an artist with its shows split into upcoming and past at `now`.
    pub async fn find_detail(
        conn: &mut PgConnection,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<ArtistDetail>, sqlx::Error> {
        let Some(artist) = Self::find_by_id(&mut *conn, id).await? else {
            return Ok(None);
        };
        let shows = ShowRepo::list_for_artist(conn, id).await?;
        Ok(Some(ArtistDetail::new(artist, partition_shows(shows, now))))
    }

    /// The most recently listed artists, newest first.
    pub async fn recent(
        conn: &mut PgConnection,
        limit: i64,
    ) -> Result<Vec<RecentListing>, sqlx::Error> {
        sqlx::query_as::<_, RecentListing>(
            "SELECT id, name, created_at FROM artists ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(conn)
        .await
    }

    /// `{id, name}` pairs for the show booking form, ordered by name.
    pub async fn choices(conn: &mut PgConnection) -> Result<Vec<EntityRef>, sqlx::Error> {
        sqlx::query_as::<_, EntityRef>("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(conn)
            .await
    }
}
