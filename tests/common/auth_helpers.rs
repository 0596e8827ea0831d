//! Authentication test helpers

use clinic_backend::backend::auth::bootstrap::{ensure_admin, ADMIN_EMAIL};
use clinic_backend::backend::server::AppState;
use clinic_backend::shared::models::{NewUser, User};

pub const TEST_PASSWORD: &str = "password123";
pub const ADMIN_PASSWORD: &str = "admin-pass";

/// Create a patient `<name>` with email `<name>@example.com`
pub async fn create_patient(state: &AppState, name: &str) -> User {
    state
        .users
        .create(NewUser::new(name, format!("{}@example.com", name), TEST_PASSWORD))
        .await
        .expect("Failed to create test user")
}

/// Bootstrap the admin account and return it
pub async fn create_admin(state: &AppState) -> User {
    ensure_admin(&state.users, ADMIN_PASSWORD)
        .await
        .expect("Failed to bootstrap admin");
    state
        .users
        .get_by_email(ADMIN_EMAIL)
        .await
        .expect("Failed to read admin")
        .expect("Admin missing after bootstrap")
        .into_user()
}

/// Bearer token for `user`
pub fn token_for(state: &AppState, user: &User) -> String {
    state.tokens.issue(user.id).expect("Failed to issue token")
}
