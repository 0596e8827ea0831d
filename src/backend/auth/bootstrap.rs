/**
 * Admin Bootstrap
 *
 * Creates the fixed administrator account on first startup. The account
 * goes through the normal user pipeline, so the configured password must
 * satisfy the usual length rule.
 */

use crate::backend::auth::users::UserRepository;
use crate::backend::error::BackendError;
use crate::shared::models::{NewUser, Role, User};

pub const ADMIN_USERNAME: &str = "Admin";
pub const ADMIN_EMAIL: &str = "admin@admin.com";

/// Create the admin account unless a user with its email already exists
///
/// Returns the new user, or `None` when nothing had to be created.
pub async fn ensure_admin(
    users: &UserRepository,
    password: &str,
) -> Result<Option<User>, BackendError> {
    if users.get_by_email(ADMIN_EMAIL).await?.is_some() {
        tracing::debug!("Admin account already present");
        return Ok(None);
    }

    let admin = users
        .create(NewUser::new(ADMIN_USERNAME, ADMIN_EMAIL, password).with_role(Role::Admin))
        .await?;
    tracing::info!("Created admin account {} ({})", admin.username, admin.email);
    Ok(Some(admin))
}
