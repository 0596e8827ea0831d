/**
 * Application State
 *
 * The store handle, the repositories built on it and the token service,
 * shared by every handler. Everything here is cheap to clone: the pool is
 * reference counted and the token service sits behind an `Arc`.
 *
 * The `FromRef` implementations let handlers extract only what they use,
 * e.g. `State(posts): State<BlogRepository>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::{CredentialCodec, TokenService, UserRepository};
use crate::backend::blog::BlogRepository;
use crate::backend::db::Database;
use crate::backend::doctors::DoctorRepository;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub users: UserRepository,
    pub posts: BlogRepository,
    pub doctors: DoctorRepository,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Build every repository on top of one store handle
    pub fn new(db: Database, tokens: TokenService) -> Self {
        Self {
            users: UserRepository::new(db.clone(), CredentialCodec::new()),
            posts: BlogRepository::new(db.clone()),
            doctors: DoctorRepository::new(db.clone()),
            tokens: Arc::new(tokens),
            db,
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for UserRepository {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for BlogRepository {
    fn from_ref(state: &AppState) -> Self {
        state.posts.clone()
    }
}

impl FromRef<AppState> for DoctorRepository {
    fn from_ref(state: &AppState) -> Self {
        state.doctors.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
