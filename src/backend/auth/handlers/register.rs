/**
 * Register Handler
 *
 * POST /api/register. Creates a patient account and logs it in.
 */

use axum::{extract::State, Json};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserRepository;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::shared::validation::check_email_format;
use std::sync::Arc;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - blank field, malformed email or password shorter
///   than 6 characters
/// * `409 Conflict` - username or email already registered
/// * `500 Internal Server Error` - hashing, store or signing failure
pub async fn register(
    State(users): State<UserRepository>,
    State(tokens): State<Arc<TokenService>>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    check_email_format("email", &request.email)?;
    let user = users.create(request.into()).await?;
    let token = tokens.issue(user.id)?;

    tracing::info!("User registered: {} ({})", user.username, user.id);

    Ok(Json(AuthResponse {
        success: true,
        message: "registration successful".to_string(),
        token,
        user: user.into(),
    }))
}
