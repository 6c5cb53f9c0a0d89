//! Unified error handling for the web application.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use cafe_registry_core::CafeId;

use crate::db::RepositoryError;

/// Application-level error type.
///
/// Form validation failures are not errors; they re-render the form locally
/// and never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(RepositoryError),

    /// A cafe id in the path does not exist.
    #[error("No cafe with id {0}")]
    CafeNotFound(CafeId),

    /// The cafe name collides with an existing row.
    #[error("A cafe with that name already exists")]
    DuplicateName,

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => Self::DuplicateName,
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Database(_) | Self::Template(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Database(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::CafeNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateName => StatusCode::CONFLICT,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Template(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
