//! Shared Module
//!
//! Database-free types: entity models, listing filters and the
//! validate/sanitize pipeline every write passes through. Nothing here
//! depends on the `ssr` feature except the optional `sqlx::FromRow` derives.

/// Shared error types
pub mod error;

/// Users, blog posts and doctors
pub mod models;

/// Field rules and sanitization
pub mod validation;

pub use error::SharedError;
pub use validation::{Sanitized, Validate, Validated};
