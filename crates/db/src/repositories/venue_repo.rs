//! Repository for the `venues` table.

use fyyur_core::listing::{group_by_area, Area};
use fyyur_core::search::like_pattern;
use fyyur_core::shows::partition_shows;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgConnection;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueDetail, VenueSummary};
use crate::models::{EntityRef, RecentListing, SearchResults};
use crate::repositories::ShowRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
    website, seeking_talent, seeking_description, genres, created_at, updated_at";

/// Summary columns with the upcoming-show count; `$1` is the reference time.
const SUMMARY_SELECT: &str = "SELECT v.id, v.name, v.city, v.state, \
        COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
     FROM venues v \
     LEFT JOIN shows s ON s.venue_id = v.id";

/// Provides CRUD and listing queries for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link, \
                 website, seeking_talent, seeking_description, genres) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(&input.genres)
            .fetch_one(conn)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Replace every editable column of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET \
                 name = $2, city = $3, state = $4, address = $5, phone = $6, \
                 image_link = $7, facebook_link = $8, website = $9, \
                 seeking_talent = $10, seeking_description = $11, genres = $12, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(&input.genres)
            .fetch_optional(conn)
            .await
    }

    /// Delete a venue by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while shows still reference it.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every venue with its number of shows starting at or after `now`,
    /// ordered by city, state, name, id.
    pub async fn list_summaries(
        conn: &mut PgConnection,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} \
             GROUP BY v.id \
             ORDER BY v.city, v.state, v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .fetch_all(conn)
            .await
    }

    /// Venues grouped into (city, state) areas for the listing page.
    pub async fn list_areas(
        conn: &mut PgConnection,
        now: Timestamp,
    ) -> Result<Vec<Area<VenueSummary>>, sqlx::Error> {
        let venues = Self::list_summaries(conn, now).await?;
        Ok(group_by_area(venues))
    }

    /// Case-insensitive substring search on the venue name.
    ///
    /// The term is matched literally; an empty term matches every venue.
    pub async fn search(
        conn: &mut PgConnection,
        term: &str,
        now: Timestamp,
    ) -> Result<SearchResults<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} \
             WHERE v.name ILIKE $2 ESCAPE '\\' \
             GROUP BY v.id \
             ORDER BY v.name, v.id"
        );
        let venues = sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .bind(like_pattern(term))
            .fetch_all(conn)
            .await?;
        Ok(SearchResults::new(venues))
    }

    /// Find a venue with its shows split into upcoming and past at `now`.
    pub async fn find_detail(
        conn: &mut PgConnection,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<VenueDetail>, sqlx::Error> {
        let Some(venue) = Self::find_by_id(&mut *conn, id).await? else {
            return Ok(None);
        };
        let shows = ShowRepo::list_for_venue(conn, id).await?;
        Ok(Some(VenueDetail::new(venue, partition_shows(shows, now))))
    }

    /// The most recently listed venues, newest first.
    pub async fn recent(
        conn: &mut PgConnection,
        limit: i64,
    ) -> Result<Vec<RecentListing>, sqlx::Error> {
        sqlx::query_as::<_, RecentListing>(
            "SELECT id, name, created_at FROM venues ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(conn)
        .await
    }

    /// `{id, name}` pairs for the show booking form, ordered by name.
    pub async fn choices(conn: &mut PgConnection) -> Result<Vec<EntityRef>, sqlx::Error> {
        sqlx::query_as::<_, EntityRef>("SELECT id, name FROM venues ORDER BY name, id")
            .fetch_all(conn)
            .await
    }
}
