use std::any::Any;

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::FormRejection;
use fyyur_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// with a status that reflects the failure kind.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fyyur_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
                CoreError::Constraint(msg) => {
                    (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No route for {path}"),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        error_response(status, code, message)
    }
}

fn error_response(status: StatusCode, code: &str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });

    (status, axum::Json(body)).into_response()
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key (23503) and unique (23505) violations map to 409.
/// - Not-null (23502), check (23514) and data exceptions (class 22) map to 422.
/// - Pool exhaustion, closed pools and I/O or TLS failures map to 503.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            let constraint = db_err.constraint().unwrap_or("unknown");
            match code.as_deref() {
                Some("23503") | Some("23505") => (
                    StatusCode::CONFLICT,
                    "CONSTRAINT_VIOLATION",
                    constraint_message(constraint),
                ),
                Some("23502") | Some("23514") => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    format!("Invalid or missing value ({constraint})"),
                ),
                Some(c) if c.starts_with("22") => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    "Malformed value".to_string(),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            }
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => {
            tracing::error!(error = %err, "Database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORE_UNAVAILABLE",
                "The database is temporarily unavailable, please try again".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// User-facing text for a named schema constraint.
fn constraint_message(constraint: &str) -> String {
    match constraint {
        "fk_shows_venue" => "The venue does not exist or still has shows booked".to_string(),
        "fk_shows_artist" => "The artist does not exist or still has shows booked".to_string(),
        "uq_shows_venue_artist_start" => {
            "This artist is already booked at this venue at that start time".to_string()
        }
        other => format!("Constraint violated: {other}"),
    }
}

/// Turn a handler panic into the standard 500 JSON body.
///
/// Installed through `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Handler panicked");

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
