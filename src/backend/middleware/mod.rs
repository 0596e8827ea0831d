//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - bearer-token authentication and the `AuthUser` /
//!   `AdminUser` extractors
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use clinic_backend::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/api/dashboard", get(dashboard))
//!     .route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AdminUser, AuthUser, AuthenticatedUser};
