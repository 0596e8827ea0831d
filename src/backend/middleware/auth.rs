/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in user. The middleware validates
 * the bearer token, re-reads the user from the store (so role changes and
 * deletions take effect immediately) and attaches it to the request.
 * Handlers then pull it out with [`AuthUser`] or [`AdminUser`].
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::models::User;

/// User resolved for the current request
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| BackendError::unauthenticated("missing authorization header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| BackendError::unauthenticated("invalid authorization header format"))?;

    Ok(token)
}

/// Authentication middleware
///
/// Returns 401 if the token is missing, malformed, invalid, expired, or
/// belongs to a user that no longer exists.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;

    let user_id = state.tokens.validate(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::from(e)
    })?;

    let user = state.users.get_by_id(user_id).await?.ok_or_else(|| {
        tracing::warn!("Token for unknown user {}", user_id);
        BackendError::unauthenticated("user not found")
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthenticated("authentication required")
            })?;

        Ok(AuthUser(auth.user))
    }
}

/// Like [`AuthUser`], but rejects non-admins with 403
#[derive(Clone, Debug)]
pub struct AdminUser(pub User);

impl<S: Send + Sync> FromRequestParts<S> for AdminUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            tracing::warn!("User {} ({}) denied admin route", user.id, user.role);
            return Err(BackendError::Forbidden);
        }
        Ok(AdminUser(user))
    }
}
