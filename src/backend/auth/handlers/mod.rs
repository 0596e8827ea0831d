//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Request and response types
//! ├── register.rs   - User registration handler
//! ├── login.rs      - User authentication handler
//! └── dashboard.rs  - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/register - create a patient account, return a token
//! - **`login`** - POST /api/login - verify credentials, return a token
//! - **`dashboard`** - GET /api/dashboard - current user (requires token)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Dashboard handler
pub mod dashboard;

pub use types::{AuthResponse, DashboardResponse, LoginRequest, RegisterRequest, UserResponse};

pub use dashboard::dashboard;
pub use login::login;
pub use register::register;
