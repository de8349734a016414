//! Error types and HTTP response conversion
//!
//! Every failure that reaches a client is rendered with the same body:
//!
//! ```json
//! { "success": false, "error": 404, "message": "question 12 does not exist" }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::repository::{RepositoryError, RepositoryOperation};

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Storage failure that no handler reclassified
    #[error("{0}")]
    Repository(RepositoryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed required input (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Referenced entity or result set is absent (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation was attempted but could not be carried out (422)
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Route exists but not for this method (405)
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    /// Reclassify a storage failure during the `write` request as unprocessable
    ///
    /// `err.operation` may differ from `write` when the failure came from the
    /// listing read that follows the write.
    pub fn unprocessable(write: RepositoryOperation, err: RepositoryError) -> Self {
        tracing::warn!(
            write = %write,
            operation = %err.operation,
            kind = %err.kind,
            retriable = err.is_retriable(),
            "Write rejected: {}", err.message
        );
        Error::Unprocessable(format!("could not {} question", write))
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Repository(_) | Error::Config(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// HTTP status code
    pub error: u16,

    /// Error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            Error::BadRequest(msg) | Error::NotFound(msg) | Error::Unprocessable(msg) => msg,
            Error::MethodNotAllowed => "method not allowed".to_string(),

            Error::Repository(ref e) => {
                // Log with structured context
                tracing::error!(
                    operation = %e.operation,
                    kind = %e.kind,
                    entity_type = ?e.entity_type,
                    entity_id = ?e.entity_id,
                    retriable = e.is_retriable(),
                    "Repository error: {}", e.message
                );

                // Don't expose internal details
                "internal server error".to_string()
            }

            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                "internal server error".to_string()
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                "internal server error".to_string()
            }

            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse::new(status, message))).into_response()
    }
}

// Manual From implementations for boxed errors
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        Error::Repository(err)
    }
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Repository(RepositoryError::from(err))
    }
}

#[cfg(feature = "database")]
impl From<sqlx::migrate::MigrateError> for Error {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Error::Internal(format!("Migration failed: {}", err))
    }
}
