//! Admin bootstrap and user store tests

use assert_matches::assert_matches;
use clinic_backend::backend::auth::bootstrap::{ensure_admin, ADMIN_EMAIL, ADMIN_USERNAME};
use clinic_backend::backend::BackendError;
use clinic_backend::shared::models::NewUser;

use crate::common::{create_patient, test_state, TEST_PASSWORD};

#[tokio::test]
async fn test_bootstrap_creates_admin_once() {
    let state = test_state().await;

    let admin = ensure_admin(&state.users, "admin-pass")
        .await
        .unwrap()
        .expect("first run creates the admin");
    assert_eq!(admin.username, ADMIN_USERNAME);
    assert_eq!(admin.email, ADMIN_EMAIL);
    assert!(admin.is_admin());

    assert_eq!(ensure_admin(&state.users, "admin-pass").await.unwrap(), None);
}

#[tokio::test]
async fn test_bootstrap_rejects_short_password() {
    let state = test_state().await;

    let result = ensure_admin(&state.users, "123").await;
    assert_matches!(result, Err(BackendError::Validation(_)));
    assert!(state.users.get_by_email(ADMIN_EMAIL).await.unwrap().is_none());
}

#[tokio::test]
async fn test_stored_hash_verifies() {
    let state = test_state().await;
    let user = create_patient(&state, "alice").await;
    assert_eq!(user.role, "patient");

    let credentials = state
        .users
        .get_by_email("alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(credentials.password_hash, TEST_PASSWORD);
    assert!(state
        .users
        .codec()
        .verify(&credentials.password_hash, TEST_PASSWORD)
        .unwrap());
}

#[tokio::test]
async fn test_username_is_escaped() {
    let state = test_state().await;
    let user = state
        .users
        .create(NewUser::new("  <b>bob</b> ", "bob@example.com", TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(user.username, "&lt;b&gt;bob&lt;/b&gt;");
}
