/**
 * Backend Error Types
 *
 * This module defines the error type returned by repositories and HTTP
 * handlers. Every variant maps to exactly one HTTP status.
 *
 * # Error Categories
 *
 * | Variant | Status |
 * |---|---|
 * | `Validation`, `BadRequest` | 400 |
 * | `Unauthenticated` | 401 |
 * | `Forbidden` | 403 |
 * | `NotFound` | 404 |
 * | `DuplicateKey` | 409 |
 * | `Credential`, `Database`, `Internal` | 500 |
 *
 * Store errors are classified on conversion: uniqueness violations become
 * `DuplicateKey`, foreign-key violations a `Validation` error on
 * `author_id`, and everything else stays an opaque `Database` error.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::credentials::CredentialError;
use crate::backend::auth::sessions::TokenError;
use crate::shared::SharedError;

/// Columns with a uniqueness constraint, in the order they are matched
/// against a driver's constraint name or message
const UNIQUE_FIELDS: [&str; 3] = ["license_number", "username", "email"];

/// Client message for any rejected bearer token, expired or not
pub const INVALID_TOKEN_MESSAGE: &str = "invalid or expired token";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// A record failed a field rule
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// The request could not be decoded (bad JSON, non-numeric id, ...)
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A unique column already holds this value
    #[error("{field} already exists")]
    DuplicateKey {
        /// The conflicting column
        field: String,
    },

    /// The addressed record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Missing, malformed, invalid or expired credentials
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Authenticated, but the role does not allow this
    #[error("forbidden")]
    Forbidden,

    /// Password hashing or verification failed structurally
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Unclassified store failure
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Anything else that is our fault
    #[error("internal error: {0}")]
    Internal(String),
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateKey { .. } => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Credential(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message; internal details are never exposed
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.reason(),
            Self::BadRequest(message) => message.clone(),
            Self::DuplicateKey { field } => format!("{} already exists", field),
            Self::NotFound(what) => format!("{} not found", what),
            Self::Unauthenticated(message) => message.clone(),
            Self::Forbidden => "admin access required".to_string(),
            Self::Credential(_) | Self::Database(_) | Self::Internal(_) => {
                "internal server error".to_string()
            }
        }
    }

    /// Offending field, for validation and uniqueness errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation(err) => err.field(),
            Self::DuplicateKey { field } => Some(field),
            _ => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let haystack = format!(
                    "{} {}",
                    db_err.constraint().unwrap_or_default(),
                    db_err.message()
                );
                let field = UNIQUE_FIELDS
                    .iter()
                    .find(|f| haystack.contains(*f))
                    .copied()
                    .unwrap_or("record");
                return Self::DuplicateKey {
                    field: field.to_string(),
                };
            }
            if db_err.is_foreign_key_violation() {
                return Self::Validation(SharedError::validation(
                    "author_id",
                    "author does not exist",
                ));
            }
        }
        Self::Database(err)
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken | TokenError::ExpiredToken => {
                Self::unauthenticated(INVALID_TOKEN_MESSAGE)
            }
            TokenError::Signing(message) => Self::Internal(message),
        }
    }
}
