//! Server Module
//!
//! Configuration, shared state and startup.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports
//! ├── config.rs   - Environment configuration
//! ├── state.rs    - AppState and FromRef implementations
//! └── init.rs     - Store setup, admin bootstrap, app creation
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, init_state, StartupError};
pub use state::AppState;
