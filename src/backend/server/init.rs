/**
 * Server Initialization
 *
 * # Startup Sequence
 *
 * 1. Connect the store (PostgreSQL or SQLite) and ping it
 * 2. Run the dialect's migrations
 * 3. Ensure the bootstrap admin account exists
 * 4. Build `AppState` and the router
 *
 * Failing to reach or migrate the store aborts startup. A failed admin
 * bootstrap is logged and the server starts anyway.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::auth::{bootstrap::ensure_admin, TokenService};
use crate::backend::db::Database;
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect, migrate and bootstrap, returning the shared state
pub async fn init_state(config: &ServerConfig) -> Result<AppState, StartupError> {
    let db = Database::connect(&config.database).await?;
    db.ping().await?;
    tracing::info!("Connected to {} database", db.dialect().as_str());

    db.migrate().await?;

    let state = AppState::new(db, TokenService::new(&config.jwt_secret, config.token_ttl));

    if let Err(e) = ensure_admin(&state.users, &config.admin_password).await {
        tracing::error!("Failed to create admin account: {}", e);
    }

    Ok(state)
}

/// Create the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    let state = init_state(config).await?;
    Ok(create_router(state))
}
