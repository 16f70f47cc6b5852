//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&mut PgConnection` as the first argument. Pass a transaction from
//! [`crate::begin`] for writes so the caller owns commit/rollback.

pub mod artist_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;

/// Default number of rows in "recently listed" queries.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;
