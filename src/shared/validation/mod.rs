//! Record Validation and Sanitization
//!
//! Every write goes through two stages, in this order:
//!
//! 1. [`Validate::validate`] turns a raw client payload into a
//!    [`Validated<T>`], or rejects it with a field-addressed
//!    [`SharedError::ValidationError`].
//! 2. An entity-specific `sanitize` method, defined only on `Validated<T>`,
//!    trims and HTML-escapes free text and produces a [`Sanitized<T>`].
//!
//! Repositories accept only `Sanitized<T>`, so neither stage can be skipped
//! or run out of order. Both wrappers can only be built inside this crate.

pub mod blog;
pub mod doctor;
pub mod user;

use crate::shared::error::SharedError;

pub use blog::EXCERPT_CHARS;
pub use user::{UserDraft, UserRecord, MIN_PASSWORD_CHARS};

/// A value that passed its entity's validation rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(value)
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}

/// A validated value whose free text has been cleaned for persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized<T>(T);

impl<T> Sanitized<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(value)
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Field-level validation of a raw payload
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Validated<Self::Output>, SharedError>;
}

/// Fail with `"<field> is required"` when the value is blank after trimming
pub(crate) fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{} is required", field)));
    }
    Ok(())
}

/// Fail with `"invalid email format"` unless the trimmed value looks like
/// `local@domain.tld`; blank values are left to [`require`]
pub(crate) fn check_email_format(field: &str, value: &str) -> Result<(), SharedError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    let well_formed = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !well_formed {
        return Err(SharedError::validation(field, "invalid email format"));
    }
    Ok(())
}

/// Trim, then escape HTML-significant characters (including quotes)
pub(crate) fn clean(value: &str) -> String {
    html_escape::encode_quoted_attribute(value.trim()).into_owned()
}
