//! Application error taxonomy and HTTP response mapping.
//!
//! Every failure a request can surface is represented by a single [`AppError`]
//! variant, each of which maps to one HTTP status code and the common
//! `{ "error": "<message>" }` body. Code conflicts additionally carry
//! alternative-code suggestions.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body returned to clients.
///
/// `suggestions` is only populated for code conflicts and omitted otherwise.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
}

/// All failures the service can surface to a caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input. Maps to `400 Bad Request`.
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credentials. Maps to `401 Unauthorized`.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated caller does not own the resource. Maps to `403 Forbidden`.
    #[error("{0}")]
    Forbidden(String),

    /// Unknown short code or resource. Maps to `404 Not Found`.
    #[error("{0}")]
    NotFound(String),

    /// The link exists but its expiry has passed. Maps to `410 Gone`,
    /// so clients can distinguish "gone" from "never existed".
    #[error("{0}")]
    Expired(String),

    /// Short code (or email) already in use. Maps to `400 Bad Request`
    /// and may carry alternative-code suggestions.
    #[error("{message}")]
    Conflict {
        message: String,
        suggestions: Vec<String>,
    },

    /// Store or encoder failure. Maps to `500 Internal Server Error`.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn expired(message: impl Into<String>) -> Self {
        Self::Expired(message.into())
    }

    pub fn conflict(message: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            suggestions,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, suggestions) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message, Vec::new()),
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message, Vec::new()),
            AppError::Forbidden(message) => (StatusCode::FORBIDDEN, message, Vec::new()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message, Vec::new()),
            AppError::Expired(message) => (StatusCode::GONE, message, Vec::new()),
            AppError::Conflict {
                message,
                suggestions,
            } => (StatusCode::BAD_REQUEST, message, suggestions),
            AppError::Internal(message) => {
                tracing::error!("internal error: {message}");
                // Never leak internals to the client.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = ErrorBody {
            error: message,
            suggestions,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict("Unique constraint violation", Vec::new());
            }
        }

        tracing::error!("database error: {e}");
        AppError::internal("Database error")
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}
