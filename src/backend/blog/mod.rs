//! Blog Module
//!
//! Post storage with a draft → published lifecycle, view counting and
//! aggregate stats, plus the public and admin HTTP handlers.

/// Blog post repository
pub mod repository;

/// HTTP handlers
pub mod handlers;

pub use repository::BlogRepository;
