//! Past/upcoming partitioning of shows and start-time parsing/formatting.
//!
//! A show is *upcoming* when its start time is at or after the reference
//! instant and *past* otherwise. The split is always computed against a
//! `now` captured once by the caller, never stored.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Display format for show start times (always UTC).
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Naive input formats accepted from the show form, tried in order.
const NAIVE_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

// ---------------------------------------------------------------------------
// Partitioning
// ---------------------------------------------------------------------------

/// Anything with a scheduled start time.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// Whether a show starting at `start_time` counts as upcoming at `now`.
pub fn is_upcoming(start_time: Timestamp, now: Timestamp) -> bool {
    start_time >= now
}

/// Shows split into upcoming and past, each ordered by start time ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partitioned<T> {
    pub upcoming: Vec<T>,
    pub past: Vec<T>,
}

impl<T> Partitioned<T> {
    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn total(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }

    /// Apply `f` to every show in both halves, keeping the split.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Partitioned<U> {
        Partitioned {
            upcoming: self.upcoming.into_iter().map(&mut f).collect(),
            past: self.past.into_iter().map(&mut f).collect(),
        }
    }
}

/// Split `shows` into upcoming and past relative to `now`.
///
/// Both halves are sorted by start time ascending. The sort is stable, so
/// shows sharing a start time keep their input order (the repositories feed
/// rows ordered by id).
pub fn partition_shows<T, I>(shows: I, now: Timestamp) -> Partitioned<T>
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    let (mut upcoming, mut past): (Vec<T>, Vec<T>) = shows
        .into_iter()
        .partition(|show| is_upcoming(show.start_time(), now));

    upcoming.sort_by_key(|show| show.start_time());
    past.sort_by_key(|show| show.start_time());

    Partitioned { upcoming, past }
}

// ---------------------------------------------------------------------------
// Start time text
// ---------------------------------------------------------------------------

/// Render a start time the way listings display it.
pub fn format_start_time(start_time: Timestamp) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

/// Parse a start time submitted through the show form.
///
/// Accepts RFC 3339 (any offset, normalized to UTC) and the naive formats in
/// [`NAIVE_INPUT_FORMATS`], which are interpreted as UTC.
pub fn parse_start_time(input: &str) -> Result<Timestamp, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Start time is required".to_string());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            format!("Invalid start time '{input}'. Expected a format like 2024-05-21 20:00:00")
        })
}
