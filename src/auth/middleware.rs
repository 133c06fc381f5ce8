use crate::auth::error::AuthError;
use crate::auth::token::{Payload, TokenCodec};
use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// The only authorization scheme the middleware accepts, matched
/// case-insensitively.
const BEARER_SCHEME: &str = "bearer";

/// Gate a request on a valid bearer token.
///
/// Wire it with [`axum::middleware::from_fn`], closing over the codec built
/// at startup:
///
/// ```ignore
/// let protected = Router::new()
///     .route("/users/me", get(me))
///     .layer(middleware::from_fn(move |req, next| {
///         require_bearer(codec.clone(), req, next)
///     }));
/// ```
///
/// On success the verified [`Payload`] is stored in the request extensions,
/// where downstream handlers read it through [`AuthPayload`]. Every failure
/// short-circuits with a 401 before handler code runs.
pub async fn require_bearer(
    codec: Arc<TokenCodec>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return Err(AuthError::MissingHeader);
    };
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
    if value.is_empty() {
        return Err(AuthError::MissingHeader);
    }

    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(AuthError::MalformedHeader);
    }

    let scheme = fields[0].to_lowercase();
    if scheme != BEARER_SCHEME {
        return Err(AuthError::UnsupportedScheme(scheme));
    }

    let payload = codec.verify_token(fields[1])?;
    req.extensions_mut().insert(payload);

    Ok(next.run(req).await)
}

/// Extractor for the verified token payload of the current request.
///
/// Only available behind [`require_bearer`]; using it on an unprotected
/// route rejects the request.
pub struct AuthPayload(pub Payload);

impl<S> FromRequestParts<S> for AuthPayload
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Payload>()
            .cloned()
            .map(AuthPayload)
            .ok_or(AuthError::MissingHeader)
    }
}
