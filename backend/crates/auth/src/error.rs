//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User id does not resolve to a live row
    #[error("User not found")]
    UserNotFound,

    /// Email already registered (unique constraint)
    #[error("A user with this email already exists")]
    EmailTaken,

    /// Wrong email or password; never says which
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing Authorization header or non-bearer scheme
    #[error("Authentication token is missing")]
    MissingToken,

    /// Bad signature, malformed structure, or expired token.
    /// Callers treat all three identically.
    #[error("Invalid or expired authentication token")]
    TokenInvalid,

    /// Authenticated, but the role does not allow the operation
    #[error("{0}")]
    Forbidden(&'static str),

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

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
            AuthError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::Forbidden(_) => ErrorKind::Forbidden,
            AuthError::Validation(_) => ErrorKind::UnprocessableEntity,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Forbidden(_) => {
                tracing::warn!("Role gate rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
