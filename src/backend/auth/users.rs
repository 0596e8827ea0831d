/**
 * User Repository
 *
 * Database operations for users. Creation always runs
 * validate → sanitize (which hashes the password) → insert, so no caller
 * can store an unchecked record or a plaintext password.
 *
 * Only [`UserRepository::get_by_email`] selects the password hash; it
 * exists for login and nothing else.
 */

use chrono::Utc;

use crate::backend::auth::credentials::CredentialCodec;
use crate::backend::db::Database;
use crate::backend::error::BackendError;
use crate::shared::models::{NewUser, User, UserCredentials};
use crate::shared::validation::{clean, Validate};

const USER_COLUMNS: &str = "id, username, email, role, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct UserRepository {
    db: Database,
    codec: CredentialCodec,
}

impl UserRepository {
    pub fn new(db: Database, codec: CredentialCodec) -> Self {
        Self { db, codec }
    }

    pub fn codec(&self) -> &CredentialCodec {
        &self.codec
    }

    /// Validate, sanitize and insert a new user
    ///
    /// # Errors
    ///
    /// * `Validation` - a required field is blank or the password is too short
    /// * `DuplicateKey` - username or email is taken
    pub async fn create(&self, input: NewUser) -> Result<User, BackendError> {
        let record = input
            .validate()?
            .sanitize_with(|password| self.codec.hash(password))?
            .into_inner();
        let now = Utc::now();

        let mut stmt = self.db.statement();
        stmt.push("INSERT INTO users (username, email, password_hash, role, created_at, updated_at) VALUES (")
            .push_bind(record.username)
            .push(", ")
            .push_bind(record.email)
            .push(", ")
            .push_bind(record.password_hash)
            .push(", ")
            .push_bind(record.role)
            .push(", ")
            .push_bind(now)
            .push(", ")
            .push_bind(now)
            .push(")")
            .push(self.db.dialect().returning_id());

        let id = self.db.insert(&stmt).await?;
        tracing::info!("Created user {}", id);

        self.get_by_id(id)
            .await?
            .ok_or_else(|| BackendError::internal(format!("user {} vanished after insert", id)))
    }

    /// Look up a user by email, including the password hash
    ///
    /// The email is cleaned the same way it was at creation.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserCredentials>, BackendError> {
        let mut stmt = self.db.statement();
        stmt.push("SELECT id, username, email, password_hash, role, created_at, updated_at FROM users WHERE email = ")
            .push_bind(clean(email));

        Ok(self.db.fetch_optional(&stmt).await?)
    }

    /// Look up a user by id; never selects the hash
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>, BackendError> {
        let mut stmt = self.db.statement();
        stmt.push("SELECT ")
            .push(USER_COLUMNS)
            .push(" FROM users WHERE id = ")
            .push_bind(id);

        Ok(self.db.fetch_optional(&stmt).await?)
    }
}
