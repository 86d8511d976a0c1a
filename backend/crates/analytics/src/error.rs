//! Analytics Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Analytics-specific result type alias
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Analytics-specific error variants
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalyticsError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl IntoResponse for AnalyticsError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Analytics error");
        self.to_app_error().into_response()
    }
}
