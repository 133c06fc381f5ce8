//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Authentication handlers (register, login).
pub mod auth;
/// Health check handler.
pub mod health;
/// Authenticated account handlers.
pub mod users;
