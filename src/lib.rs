//! Clinic Backend - Main Library
//!
//! A small clinic-management web backend: user registration and login, a
//! token-gated dashboard, a blog content system and a doctor directory,
//! persisted in PostgreSQL or SQLite.
//!
//! # Module Structure
//!
//! - **`shared`** - Models, listing filters and record validation
//!   - Pure code, no I/O
//!   - Error types for the validation layer
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and bearer-token middleware
//!   - Credential codec and token service
//!   - Store handle and record repositories
//!
//! # Feature Flags
//!
//! - **`ssr`** - enables the backend (axum, sqlx, bcrypt, jsonwebtoken).
//!   On by default.
//!
//! # Usage
//!
//! ```rust,no_run
//! use clinic_backend::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation failures
//! - `backend::error::BackendError` for everything that reaches HTTP

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
