//! Backend Module
//!
//! All server-side code: the Axum HTTP server, authentication, the store
//! and the record repositories. Only compiled with the `ssr` feature.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup
//! - **`routes`** - Router assembly, health check
//! - **`auth`** - Credential codec, token service, user repository, handlers
//! - **`blog`** - Blog post repository and handlers
//! - **`doctors`** - Doctor repository and handlers
//! - **`db`** - Store handle, dialects, statement builder
//! - **`middleware`** - Bearer-token authentication and role extractors
//! - **`error`** - `BackendError` and its HTTP mapping
//! - **`extract`** / **`response`** - JSON request and response envelopes
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs
//! ├── main.rs         - Server binary
//! ├── server/
//! ├── routes/
//! ├── auth/
//! ├── blog/
//! ├── doctors/
//! ├── db/
//! ├── middleware/
//! ├── error/
//! ├── extract.rs
//! └── response.rs
//! ```
//!
//! # Request Flow
//!
//! bearer token (protected routes) → user re-read from the store → JSON
//! payload → validate → sanitize → repository → JSON envelope.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Blog posts
pub mod blog;

/// Doctor directory
pub mod doctors;

/// Store handle and SQL building
pub mod db;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Request extractors
pub mod extract;

/// Success envelope
pub mod response;

pub use error::BackendError;
pub use server::create_app;
