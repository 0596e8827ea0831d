//! User validation
//!
//! Sanitization needs a password hasher. The shared layer has no access to
//! the credential codec, so the hasher is passed in by the caller.

use crate::shared::error::SharedError;
use crate::shared::models::{NewUser, Role};
use crate::shared::validation::{clean, require, Sanitized, Validate, Validated};

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_CHARS: usize = 6;

/// A user that passed validation; the password is still plaintext
#[derive(Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl std::fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDraft")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// The exact values inserted into the `users` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl Validate for NewUser {
    type Output = UserDraft;

    fn validate(self) -> Result<Validated<UserDraft>, SharedError> {
        require("username", &self.username)?;
        require("email", &self.email)?;
        require("password", &self.password)?;

        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(SharedError::validation(
                "password",
                format!("password must be at least {} characters", MIN_PASSWORD_CHARS),
            ));
        }

        // Internal creation paths may set any role; only an unset one is defaulted.
        let role = self
            .role
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| Role::default().as_str().to_string());

        Ok(Validated::new(UserDraft {
            username: self.username,
            email: self.email,
            password: self.password,
            role,
        }))
    }
}

impl Validated<UserDraft> {
    /// Clean username and email, then hash the password exactly once
    pub fn sanitize_with<E>(
        self,
        hash: impl FnOnce(&str) -> Result<String, E>,
    ) -> Result<Sanitized<UserRecord>, E> {
        let draft = self.into_inner();
        let password_hash = hash(&draft.password)?;

        Ok(Sanitized::new(UserRecord {
            username: clean(&draft.username),
            email: clean(&draft.email),
            password_hash,
            role: draft.role,
        }))
    }
}
