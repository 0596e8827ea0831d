//! Authentication Module
//!
//! Password hashing, session tokens, the user store and the HTTP handlers
//! built on them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - bcrypt credential codec
//! ├── sessions.rs     - JWT token service
//! ├── users.rs        - User repository
//! ├── bootstrap.rs    - First-start admin account
//! └── handlers/       - register, login, dashboard
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email, password → user created → token returned
//! 2. **Login**: email, password → hash verified → token returned
//! 3. **Protected request**: bearer token validated → user re-read from the
//!    store → handler runs with the fresh user and role
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256 JWTs carrying only the user id
//! - Tokens expire after `TOKEN_TTL_HOURS` (24 by default)
//! - Invalid credentials return 401 with no hint which part was wrong

/// Password hashing
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// User repository
pub mod users;

/// Admin account bootstrap
pub mod bootstrap;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::{CredentialCodec, CredentialError};
pub use handlers::{dashboard, login, register};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::UserRepository;
