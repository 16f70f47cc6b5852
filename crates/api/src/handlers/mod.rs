pub mod artist;
pub mod home;
pub mod show;
pub mod venue;

use std::fmt::Display;

use axum::http::Uri;
use fyyur_db::UnitOfWork;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Finish a unit of work: commit on success, roll back on failure.
///
/// The transaction is consumed either way, so its connection is back in the
/// pool before the handler returns.
pub(crate) async fn complete<T, E>(
    tx: UnitOfWork,
    result: Result<T, E>,
    action: &'static str,
) -> AppResult<T>
where
    E: Into<AppError> + Display,
{
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tracing::warn!(action, error = %err, "Rolling back");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(action, error = %rollback_err, "Rollback failed");
            }
            Err(err.into())
        }
    }
}

/// Choices offered by the venue and artist forms.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub genres: &'static [&'static str],
    pub states: &'static [&'static str],
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            genres: fyyur_core::forms::GENRES,
            states: fyyur_core::forms::US_STATES,
        }
    }
}

/// A name search echoed back with its results.
#[derive(Debug, Serialize)]
pub struct SearchPage<T: Serialize> {
    pub search_term: String,
    #[serde(flatten)]
    pub results: fyyur_db::models::SearchResults<T>,
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
