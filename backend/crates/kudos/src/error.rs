//! Kudos Error Types
//!
//! Kudos-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Kudos-specific result type alias
pub type KudosResult<T> = Result<T, KudosError>;

/// Kudos-specific error variants
#[derive(Debug, Error)]
pub enum KudosError {
    /// Kudos id does not resolve to a live row
    #[error("Kudos not found")]
    KudosNotFound,

    /// Team id does not resolve to a live row
    #[error("Team not found")]
    TeamNotFound,

    /// Category id does not resolve to a live row
    #[error("Category not found")]
    CategoryNotFound,

    /// Unique name constraint hit on team or category
    #[error("A {0} with this name already exists")]
    NameTaken(&'static str),

    /// Input failed domain validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KudosError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            KudosError::KudosNotFound
            | KudosError::TeamNotFound
            | KudosError::CategoryNotFound => StatusCode::NOT_FOUND,
            KudosError::NameTaken(_) => StatusCode::CONFLICT,
            KudosError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            KudosError::Database(_) | KudosError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            KudosError::KudosNotFound
            | KudosError::TeamNotFound
            | KudosError::CategoryNotFound => ErrorKind::NotFound,
            KudosError::NameTaken(_) => ErrorKind::Conflict,
            KudosError::Validation(_) => ErrorKind::UnprocessableEntity,
            KudosError::Database(_) | KudosError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            KudosError::Database(e) => {
                tracing::error!(error = %e, "Kudos database error");
            }
            KudosError::Internal(msg) => {
                tracing::error!(message = %msg, "Kudos internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Kudos error");
            }
        }
    }
}

impl IntoResponse for KudosError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
