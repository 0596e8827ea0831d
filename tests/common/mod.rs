//! Common test utilities and helpers
//!
//! - In-memory store and application state fixtures
//! - User and token helpers
//! - A small HTTP driver for the router

#[cfg(feature = "ssr")]
pub mod auth_helpers;

#[cfg(feature = "ssr")]
pub use auth_helpers::*;
#[cfg(feature = "ssr")]
pub use database::*;
#[cfg(feature = "ssr")]
pub use http::*;
