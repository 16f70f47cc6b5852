//! Form vocabularies and field checks for venue, artist and show submissions.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Genres a venue or artist can be tagged with.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Two-letter US state codes accepted in the `state` field.
pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Value a checkbox field carries when ticked.
pub const CHECKBOX_ON: &str = "y";

/// Maximum length of short text fields (name, city, address, phone).
pub const MAX_SHORT_FIELD_LENGTH: u64 = 120;

/// Maximum length of link fields and the seeking description.
pub const MAX_LONG_FIELD_LENGTH: u64 = 500;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9(][0-9 ().\-]{5,18}[0-9]$").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

pub fn is_valid_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

pub fn is_valid_state(state: &str) -> bool {
    US_STATES.contains(&state)
}

/// Loose phone number check: digits with optional `+`, spaces, dots,
/// dashes and parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// A checkbox is on only when the browser sent exactly `y`.
pub fn is_checked(value: Option<&str>) -> bool {
    value == Some(CHECKBOX_ON)
}

/// Validate every genre, reporting the first unknown one.
pub fn validate_genres(genres: &[String]) -> Result<(), String> {
    match genres.iter().find(|g| !is_valid_genre(g)) {
        Some(bad) => Err(format!("Unknown genre '{bad}'")),
        None => Ok(()),
    }
}

/// Trim an optional text field, treating blank input as absent.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
