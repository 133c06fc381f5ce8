//! # Warden - Token-Gated API Service
//!
//! An HTTP API service gated by stateless bearer-token authentication.
//!
//! ## Overview
//!
//! Warden can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `warden-server` binary
//! 2. **As a library** - Import the token codec and middleware into your own
//!    Axum project
//!
//! The core is two components: a [`TokenCodec`] that issues and verifies
//! self-contained bearer tokens from a 32-byte symmetric secret, and a
//! middleware ([`auth::middleware::require_bearer`]) that enforces the
//! `Authorization: Bearer <token>` contract on every protected route.
//! Verification is stateless: no sessions, no revocation lists, no
//! server-side token table.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use warden::auth::token::TokenCodec;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let codec = TokenCodec::new(b"0123456789abcdef0123456789abcdef")?;
//! let (token, payload) = codec.create_token("alice", Uuid::new_v4(), Duration::minutes(15))?;
//! let verified = codec.verify_token(&token)?;
//! assert_eq!(verified, payload);
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`auth`] - Token codec, bearer middleware, password hashing
//! - [`db`] - User account storage
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration utilities

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Bearer-token authentication and middleware.
pub mod auth;
/// Command-line interface for the server binary.
pub mod cli;
/// User account storage.
pub mod db;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use auth::{AuthError, AuthPayload, Payload, TokenCodec, TokenError};
pub use types::{AppError, Result};
pub use utils::config::Config;

use crate::db::UserStore;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration
    pub config: Arc<Config>,
    /// User account store
    pub users: Arc<UserStore>,
    /// Token issuer and verifier
    pub codec: Arc<TokenCodec>,
}
