use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidCredential(String),

    #[error("missing bearer token")]
    TokenMissing,

    #[error("invalid bearer token")]
    TokenInvalid,

    #[error("bootstrap already executed")]
    AlreadyBootstrapped,

    #[error("signing key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("admin account missing after initialization")]
    AdminNotFound,

    #[error("token encoding error: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        // The filter rejection bodies and the bootstrap guard are contractual
        // plain text; everything else gets the structured body.
        let (status, category) = match &self {
            ApiError::TokenMissing => {
                return (StatusCode::UNAUTHORIZED, "Missing token").into_response();
            }
            ApiError::TokenInvalid => {
                return (StatusCode::UNAUTHORIZED, "Invalid token").into_response();
            }
            ApiError::AlreadyBootstrapped => {
                return (StatusCode::FORBIDDEN, "Bootstrap already executed.").into_response();
            }
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid user data."),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "User not found."),
            ApiError::InvalidCredential(_) => (StatusCode::UNAUTHORIZED, "Invalid credentials."),
            ApiError::KeyDerivation(_)
            | ApiError::AdminNotFound
            | ApiError::TokenEncoding(_)
            | ApiError::Hash(_)
            | ApiError::Database(_) => {
                error!(error = %self, "internal error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Opaque to the client; the detail already went to the log.
            "An internal server error occurred.".to_string()
        } else {
            self.to_string()
        };

        let body = ApiErrorBody {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: category.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
}
