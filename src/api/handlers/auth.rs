use crate::{
    auth::password,
    types::{AppError, LoginRequest, LoginResponse, RegisterRequest, Result, UserResponse},
    AppState,
};
use axum::{extract::State, Json};
use chrono::Duration;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Invalid input or username already taken")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>> {
    // Validate input
    if payload.username.is_empty() || payload.email.is_empty() || payload.password.len() < 8 {
        return Err(AppError::InvalidInput(
            "Username and email required and password must be at least 8 characters".to_string(),
        ));
    }

    // Hash password
    let password_hash = password::hash_password(&payload.password)?;

    // Create user; the store rejects duplicate usernames
    let user = state
        .users
        .create_user(&payload.username, &payload.email, &password_hash)?;

    Ok(Json(user.into()))
}

/// Login with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    // Unknown user and wrong password are indistinguishable to the caller
    let user = state
        .users
        .get_user_by_username(&payload.username)
        .ok_or_else(|| AppError::Auth("Invalid credentials".to_string()))?;

    if !password::verify_password(&payload.password, &user.password_hash)? {
        return Err(AppError::Auth("Invalid credentials".to_string()));
    }

    // Echo the validity window from the issued payload; the token string
    // itself stays opaque to the client
    let duration = Duration::seconds(state.config.auth.access_token_duration_secs);
    let (access_token, token_payload) = state
        .codec
        .create_token(&user.username, user.id, duration)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        access_token,
        issued_at: token_payload.issued_at,
        expires_at: token_payload.expires_at,
        user: user.into(),
    }))
}
