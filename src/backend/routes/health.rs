//! Health Check
//!
//! `GET /api/health` answers 200 while the store responds to `SELECT 1` and
//! 503 otherwise.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::backend::db::{Database, Dialect};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub dialect: Dialect,
}

pub async fn health(State(db): State<Database>) -> (StatusCode, Json<HealthResponse>) {
    let (code, database) = match db.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status: "ok",
            database,
            dialect: db.dialect(),
        }),
    )
}
