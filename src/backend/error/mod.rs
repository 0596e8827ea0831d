//! Backend Error Module
//!
//! Error type for repositories and HTTP handlers, and its conversion into
//! an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, INVALID_TOKEN_MESSAGE};
