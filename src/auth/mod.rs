//! Bearer-Token Authentication and Middleware
//!
//! This module provides the authentication infrastructure for the Warden API:
//! a stateless token codec and the Axum middleware that enforces its use on
//! every protected request.
//!
//! # Module Structure
//!
//! - [`auth::token`](crate::auth::token) - Token construction, signing, and verification
//! - [`auth::middleware`](crate::auth::middleware) - Axum middleware and extractor for protected routes
//! - [`auth::error`](crate::auth::error) - Middleware rejection types
//! - [`auth::password`](crate::auth::password) - Argon2id password hashing
//!
//! # Security Features
//!
//! - **Password Hashing**: Uses Argon2id (memory-hard) for secure password storage
//! - **Bearer Tokens**: HS256-signed tokens over a 32-byte symmetric secret,
//!   carrying a fresh token ID, the subject, and a derived validity window
//! - **Stateless Verification**: no server-side token table; any instance
//!   holding the secret can verify any issued token
//!
//! # Usage
//!
//! ## Token Issuance
//!
//! ```ignore
//! use warden::auth::token::TokenCodec;
//!
//! let codec = TokenCodec::new(config.auth.token_secret.as_bytes())?;
//! let (token, payload) = codec.create_token(&user.username, user.id, duration)?;
//! ```
//!
//! ## Middleware
//!
//! [`require_bearer`](middleware::require_bearer) validates the
//! `Authorization: Bearer <token>` header and injects the verified
//! [`Payload`](token::Payload) into the request extensions:
//!
//! ```ignore
//! let protected = Router::new()
//!     .route("/users/me", get(handler))
//!     .layer(middleware::from_fn(move |req, next| {
//!         require_bearer(codec.clone(), req, next)
//!     }));
//! ```
//!
//! ## Extracting the Payload in Handlers
//!
//! ```ignore
//! async fn protected_handler(AuthPayload(payload): AuthPayload) -> impl IntoResponse {
//!     format!("Hello, {}!", payload.username)
//! }
//! ```

/// Middleware rejection types for protected routes.
pub mod error;
/// Authentication middleware and extractors for protected routes.
pub mod middleware;
/// Argon2id password hashing and verification.
pub mod password;
/// Token construction, signing, verification, and expiry.
pub mod token;

pub use error::AuthError;
pub use middleware::{require_bearer, AuthPayload};
pub use token::{Payload, TokenCodec, TokenError};
