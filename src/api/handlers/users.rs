use crate::{
    auth::middleware::AuthPayload,
    types::{AppError, Result, UserResponse},
    AppState,
};
use axum::{extract::State, Json};

/// Get the authenticated user's account
///
/// The middleware has already verified the bearer token; this handler only
/// consumes the payload it attached to the request.
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "The authenticated account", body = UserResponse),
        (status = 401, description = "Missing, malformed, invalid, or expired bearer token")
    ),
    tag = "users"
)]
pub async fn me(
    State(state): State<AppState>,
    AuthPayload(payload): AuthPayload,
) -> Result<Json<UserResponse>> {
    let user = state
        .users
        .get_user_by_username(&payload.username)
        .ok_or_else(|| AppError::NotFound("user no longer exists".to_string()))?;

    Ok(Json(user.into()))
}
