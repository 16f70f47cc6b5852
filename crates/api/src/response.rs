//! Shared response envelope types for API handlers.
//!
//! Reads answer with a `{ "data": ... }` envelope. Successful writes answer
//! with `303 See Other`, a `Location` to follow, and a flash-style
//! `{ "message": ..., "data": ... }` body.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: venues }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body sent alongside a redirect: the flash message and the affected entity.
#[derive(Debug, Serialize)]
pub struct FlashBody<T: Serialize> {
    pub message: String,
    pub data: Option<T>,
}

/// `303 See Other` to `location`, carrying a flash message.
#[derive(Debug)]
pub struct SeeOther<T: Serialize> {
    location: String,
    body: FlashBody<T>,
}

impl<T: Serialize> SeeOther<T> {
    pub fn new(location: impl Into<String>, message: impl Into<String>, data: T) -> Self {
        Self {
            location: location.into(),
            body: FlashBody {
                message: message.into(),
                data: Some(data),
            },
        }
    }
}

impl SeeOther<()> {
    /// Redirect with a message and a `null` data field.
    pub fn message_only(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            body: FlashBody {
                message: message.into(),
                data: None,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for SeeOther<T> {
    fn into_response(self) -> Response {
        (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, self.location)],
            Json(self.body),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn see_other_sets_location() {
        let response = SeeOther::new("/venues", "Venue X was successfully listed!", 7).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/venues");
    }

    #[test]
    fn message_only_redirect() {
        let response = SeeOther::message_only("/", "The Venue has been successfully deleted!")
            .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}
