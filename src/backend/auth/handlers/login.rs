/**
 * Login Handler
 *
 * POST /api/login.
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 body
 * - Password verification is constant-time (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserRepository;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::shared::validation::{check_email_format, require};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing, or email malformed
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store failure, corrupt hash, signing failure
pub async fn login(
    State(users): State<UserRepository>,
    State(tokens): State<Arc<TokenService>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    require("email", &request.email)?;
    check_email_format("email", &request.email)?;
    require("password", &request.password)?;

    let credentials = users.get_by_email(&request.email).await?.ok_or_else(|| {
        tracing::warn!("Login failed: unknown email");
        BackendError::unauthenticated(INVALID_CREDENTIALS)
    })?;

    if !users.codec().verify(&credentials.password_hash, &request.password)? {
        tracing::warn!("Login failed: wrong password for user {}", credentials.id);
        return Err(BackendError::unauthenticated(INVALID_CREDENTIALS));
    }

    let user = credentials.into_user();
    let token = tokens.issue(user.id)?;

    tracing::info!("User logged in: {} ({})", user.username, user.id);

    Ok(Json(AuthResponse {
        success: true,
        message: "login successful".to_string(),
        token,
        user: user.into(),
    }))
}
