//! Blog Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Referenced post does not exist
    #[error("Blog post not found")]
    PostNotFound,

    /// Referenced review does not exist
    #[error("Review not found")]
    ReviewNotFound,

    /// Caller is neither the owner nor an admin
    #[error("Only the post's author or an admin may do this")]
    NotOwner,

    /// Malformed input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::PostNotFound | BlogError::ReviewNotFound => StatusCode::NOT_FOUND,
            BlogError::NotOwner => StatusCode::FORBIDDEN,
            BlogError::Validation(_) => StatusCode::BAD_REQUEST,
            BlogError::Database(_) | BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::PostNotFound | BlogError::ReviewNotFound => ErrorKind::NotFound,
            BlogError::NotOwner => ErrorKind::Forbidden,
            BlogError::Validation(_) => ErrorKind::BadRequest,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        AppError::new(self.kind(), self.to_string()).into_response()
    }
}
