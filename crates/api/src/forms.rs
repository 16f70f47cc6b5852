//! Form payloads submitted by the browser, with their validation rules.
//!
//! Every field defaults when absent so a missing input produces a readable
//! validation message instead of a deserialization error. Validated forms
//! convert into the create DTOs of `fyyur_db`.

use std::borrow::Cow;

use fyyur_core::error::CoreError;
use fyyur_core::forms::{
    is_checked, is_valid_phone, is_valid_state, normalize_optional, validate_genres,
    MAX_LONG_FIELD_LENGTH, MAX_SHORT_FIELD_LENGTH,
};
use fyyur_core::shows::parse_start_time;
use fyyur_core::types::DbId;
use fyyur_db::models::artist::CreateArtist;
use fyyur_db::models::show::CreateShow;
use fyyur_db::models::venue::CreateVenue;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

/// Fields of the new-venue and edit-venue forms.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct VenueForm {
    #[serde(default)]
    #[validate(custom(function = "required"), length(max = MAX_SHORT_FIELD_LENGTH))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "required"), length(max = MAX_SHORT_FIELD_LENGTH))]
    pub city: String,
    #[serde(default)]
    #[validate(custom(function = "us_state"))]
    pub state: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = MAX_SHORT_FIELD_LENGTH))]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "phone_number"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "genres"))]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url, length(max = MAX_LONG_FIELD_LENGTH))]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url, length(max = MAX_SHORT_FIELD_LENGTH))]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url, length(max = MAX_SHORT_FIELD_LENGTH))]
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = MAX_LONG_FIELD_LENGTH))]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Validate the submission and build the row to store.
    pub fn into_input(self) -> Result<CreateVenue, CoreError> {
        check(&self)?;
        Ok(CreateVenue {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website_link,
            seeking_talent: is_checked(self.seeking_talent.as_deref()),
            seeking_description: self.seeking_description,
            genres: self.genres,
        })
    }
}

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

/// Fields of the new-artist and edit-artist forms.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ArtistForm {
    #[serde(default)]
    #[validate(custom(function = "required"), length(max = MAX_SHORT_FIELD_LENGTH))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "required"), length(max = MAX_SHORT_FIELD_LENGTH))]
    pub city: String,
    #[serde(default)]
    #[validate(custom(function = "us_state"))]
    pub state: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "phone_number"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "genres"))]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url, length(max = MAX_LONG_FIELD_LENGTH))]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url, length(max = MAX_SHORT_FIELD_LENGTH))]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(url, length(max = MAX_SHORT_FIELD_LENGTH))]
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = MAX_LONG_FIELD_LENGTH))]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// Validate the submission and build the row to store.
    pub fn into_input(self) -> Result<CreateArtist, CoreError> {
        check(&self)?;
        Ok(CreateArtist {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website_link,
            seeking_venue: is_checked(self.seeking_venue.as_deref()),
            seeking_description: self.seeking_description,
        })
    }
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

/// Fields of the new-show form. Ids arrive as text inputs.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShowForm {
    #[serde(default)]
    #[validate(custom(function = "entity_id"))]
    pub venue_id: String,
    #[serde(default)]
    #[validate(custom(function = "entity_id"))]
    pub artist_id: String,
    #[serde(default)]
    #[validate(custom(function = "start_time"))]
    pub start_time: String,
}

impl ShowForm {
    pub fn into_input(self) -> Result<CreateShow, CoreError> {
        check(&self)?;
        Ok(CreateShow {
            venue_id: parse_id(&self.venue_id).map_err(CoreError::Validation)?,
            artist_id: parse_id(&self.artist_id).map_err(CoreError::Validation)?,
            start_time: parse_start_time(&self.start_time).map_err(CoreError::Validation)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// The navbar search box.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

impl SearchForm {
    /// The term as typed; surrounding whitespace is part of the match.
    pub fn term(&self) -> &str {
        &self.search_term
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn check(form: &impl Validate) -> Result<(), CoreError> {
    form.validate()
        .map_err(|errors| CoreError::Validation(validation_message(&errors)))
}

/// Flatten validation errors into one line, ordered by field name.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value ({})", err.code),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_optional(value))
}

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "This field is required"));
    }
    Ok(())
}

fn us_state(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid("required", "This field is required"));
    }
    if !is_valid_state(value) {
        return Err(invalid("state", format!("'{value}' is not a US state code")));
    }
    Ok(())
}

fn phone_number(value: &str) -> Result<(), ValidationError> {
    if !is_valid_phone(value) {
        return Err(invalid("phone", format!("'{value}' is not a valid phone number")));
    }
    Ok(())
}

fn genres(values: &[String]) -> Result<(), ValidationError> {
    validate_genres(values).map_err(|message| invalid("genre", message))
}

fn entity_id(value: &str) -> Result<(), ValidationError> {
    parse_id(value)
        .map(|_| ())
        .map_err(|message| invalid("id", message))
}

fn start_time(value: &str) -> Result<(), ValidationError> {
    parse_start_time(value)
        .map(|_| ())
        .map_err(|message| invalid("start_time", message))
}

fn parse_id(value: &str) -> Result<DbId, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("This field is required".to_string());
    }
    match value.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("'{value}' is not a valid id")),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn venue_form() -> VenueForm {
        VenueForm {
            name: "  The Musical Hop ".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: Some("1015 Folsom Street".into()),
            phone: Some("123-123-1234".into()),
            genres: vec!["Jazz".into(), "Reggae".into()],
            image_link: Some("https://example.com/hop.jpg".into()),
            facebook_link: None,
            website_link: Some("https://www.themusicalhop.com".into()),
            seeking_talent: Some("y".into()),
            seeking_description: Some("Looking for local artists".into()),
        }
    }

    #[test]
    fn valid_venue_converts() {
        let input = venue_form().into_input().unwrap();
        assert_eq!(input.name, "The Musical Hop");
        assert!(input.seeking_talent);
        assert_eq!(input.website.as_deref(), Some("https://www.themusicalhop.com"));
        assert_eq!(input.genres, vec!["Jazz", "Reggae"]);
    }

    #[test]
    fn checkbox_other_than_y_is_off() {
        let mut form = venue_form();
        form.seeking_talent = Some("on".into());
        assert!(!form.into_input().unwrap().seeking_talent);

        let mut form = venue_form();
        form.seeking_talent = None;
        assert!(!form.into_input().unwrap().seeking_talent);
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let mut form = venue_form();
        form.name = "   ".into();
        form.city = String::new();
        let err = form.into_input().unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("name") && msg.contains("city"));
    }

    #[test]
    fn unknown_state_rejected() {
        let mut form = venue_form();
        form.state = "ZZ".into();
        assert_matches!(form.into_input(), Err(CoreError::Validation(msg)) if msg.contains("state"));
    }

    #[test]
    fn unknown_genre_rejected() {
        let mut form = venue_form();
        form.genres.push("Polka".into());
        assert_matches!(form.into_input(), Err(CoreError::Validation(msg)) if msg.contains("Polka"));
    }

    #[test]
    fn malformed_link_rejected() {
        let mut form = venue_form();
        form.image_link = Some("not a url".into());
        assert_matches!(form.into_input(), Err(CoreError::Validation(msg)) if msg.contains("image_link"));
    }

    #[test]
    fn bad_phone_rejected() {
        let mut form = venue_form();
        form.phone = Some("call me".into());
        assert_matches!(form.into_input(), Err(CoreError::Validation(msg)) if msg.contains("phone"));
    }

    #[test]
    fn artist_form_converts() {
        let form = ArtistForm {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            genres: vec!["Rock n Roll".into()],
            seeking_venue: Some("y".into()),
            ..Default::default()
        };
        let input = form.into_input().unwrap();
        assert!(input.seeking_venue);
        assert_eq!(input.phone, None);
    }

    #[test]
    fn show_form_parses_ids_and_time() {
        let form = ShowForm {
            venue_id: "1".into(),
            artist_id: " 4 ".into(),
            start_time: "2035-04-01 20:00:00".into(),
        };
        let input = form.into_input().unwrap();
        assert_eq!(input.venue_id, 1);
        assert_eq!(input.artist_id, 4);
        assert_eq!(input.start_time.to_rfc3339(), "2035-04-01T20:00:00+00:00");
    }

    #[test]
    fn show_form_rejects_bad_input() {
        let form = ShowForm {
            venue_id: "abc".into(),
            artist_id: "0".into(),
            start_time: "tomorrow".into(),
        };
        let err = form.into_input().unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(ref msg)
                if msg.contains("venue_id") && msg.contains("artist_id") && msg.contains("start_time")
        );
    }

    #[test]
    fn empty_show_form_is_invalid() {
        assert_matches!(ShowForm::default().into_input(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn search_term_keeps_surrounding_spaces() {
        let form = SearchForm {
            search_term: " hop".into(),
        };
        assert_eq!(form.term(), " hop");
    }

    #[test]
    fn padded_state_code_is_accepted_and_trimmed() {
        let mut form = venue_form();
        form.state = " CA ".into();
        assert_eq!(form.into_input().unwrap().state, "CA");
    }
}
