use crate::auth::token::TokenCodec;
use crate::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the application router.
///
/// The codec is constructed once at startup and injected here; the
/// protected subtree closes over it.
pub fn create_router(codec: Arc<TokenCodec>) -> Router<AppState> {
    let public_routes = Router::new()
        // Public routes (no auth required)
        .route("/api/health", get(crate::api::handlers::health::health))
        .route(
            "/api/auth/register",
            post(crate::api::handlers::auth::register),
        )
        .route("/api/auth/login", post(crate::api::handlers::auth::login));

    let protected_routes = Router::new()
        // Protected routes (bearer token required)
        .route("/api/users/me", get(crate::api::handlers::users::me))
        .layer(middleware::from_fn(move |req, next| {
            crate::auth::middleware::require_bearer(codec.clone(), req, next)
        }));

    public_routes
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
