//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Warden, built on the Axum web
//! framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Authentication (`/api/auth`)
//! - `POST /api/auth/register` - Register new user
//! - `POST /api/auth/login` - Login and receive a bearer token
//!
//! ## Users (`/api/users`)
//! - `GET /api/users/me` - Get the authenticated account (protected)
//!
//! ## Health (`/api/health`)
//! - `GET /api/health` - Health check endpoint
//!
//! # Authentication
//!
//! Protected endpoints require a valid bearer token in the `Authorization`
//! header:
//! ```text
//! Authorization: Bearer <token>
//! ```
//!
//! Requests with a missing, malformed, invalid, or expired token are rejected
//! with `401 Unauthorized` and a `{"error": "<message>"}` body before any
//! handler runs.
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

use crate::types::{HealthResponse, LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use utoipa::OpenApi;

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

/// OpenAPI document for the Warden API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::auth::register,
        handlers::auth::login,
        handlers::users::me,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        UserResponse,
        HealthResponse
    )),
    tags(
        (name = "auth", description = "Registration and token issuance"),
        (name = "users", description = "Authenticated account access"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
