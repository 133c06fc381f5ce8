//! Common request/response types and error handling.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ============= Authentication Types =============

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Unique username, used as the token subject.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username to authenticate as.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Public view of a user account.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Stable account identifier.
    pub id: Uuid,
    /// Unique username.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Account creation time (seconds since epoch).
    pub created_at: i64,
}

/// Response body for a successful login.
///
/// The validity window is echoed from the issued token payload so clients
/// never need to parse the opaque token string.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque bearer token for the `Authorization` header.
    pub access_token: String,
    /// Token creation time (seconds since epoch).
    pub issued_at: i64,
    /// Token expiry time (seconds since epoch).
    pub expires_at: i64,
    /// The authenticated account.
    pub user: UserResponse,
}

/// Response body for `GET /api/health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is able to answer.
    pub status: String,
}

// ============= Error Types =============

/// Application-level error, rendered as `{"error": message}` JSON.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Authentication failure outside the middleware path (e.g. bad login).
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request body failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Auth(msg) => (axum::http::StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
