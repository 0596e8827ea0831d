//! Shared Error Types
//!
//! This module defines the error type produced by the pure, database-free
//! layer of the crate: entity validation and enum parsing. It carries enough
//! structure for the HTTP layer to address the offending field.
//!
//! # Error Categories
//!
//! - `ValidationError` - a record failed a required/format rule
//! - `UnknownVariant` - a stored or submitted value is outside a closed set
//!
//! # Usage
//!
//! ```rust
//! use clinic_backend::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "title is required");
//! assert_eq!(error.field(), Some("title"));
//! ```
use thiserror::Error;

/// Errors raised before anything touches the store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A value that does not belong to a closed set (status, sort field, ...)
    #[error("unknown {kind} '{value}'")]
    UnknownVariant {
        /// What was being parsed
        kind: &'static str,
        /// The rejected input
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown-variant error
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::UnknownVariant { .. } => None,
        }
    }

    /// Message without the field prefix, suitable for API responses
    pub fn reason(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => message.clone(),
            Self::UnknownVariant { .. } => self.to_string(),
        }
    }
}
