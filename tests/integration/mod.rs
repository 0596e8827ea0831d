//! Integration tests
//!
//! - `database` - repositories against a migrated in-memory store
//! - `api` - HTTP flows through the full router
