//! Row structs, input DTOs and composed read views.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` struct matching the table row
//! - A `Deserialize` create DTO for inserts (edits reuse it: an edit
//!   submission replaces every field)
//! - Read projections used by listings and detail pages

use fyyur_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub mod artist;
pub mod show;
pub mod venue;

/// Minimal `{id, name}` reference, used for form choices and recent listings.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct EntityRef {
    pub id: DbId,
    pub name: String,
}

/// A recently listed venue or artist for the home page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentListing {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// Result of a name search: the match count alongside the matches.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
