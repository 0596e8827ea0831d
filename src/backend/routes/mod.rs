//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs      - Module exports
//! ├── router.rs   - Router assembly and layers
//! └── health.rs   - Liveness and store check
//! ```

/// Main router creation
pub mod router;

/// Health check handler
pub mod health;

pub use router::create_router;
