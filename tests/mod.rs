//! Test suite for the clinic backend
//!
//! Everything runs against an in-memory SQLite store, so no external
//! service is needed.

pub mod common;
#[cfg(feature = "ssr")]
pub mod integration;
