/**
 * Dashboard Handler
 *
 * GET /api/dashboard. The user comes from the auth middleware, which has
 * already re-read it (and its role) from the store for this request.
 */

use axum::Json;

use crate::backend::auth::handlers::types::DashboardResponse;
use crate::backend::middleware::AuthUser;

pub async fn dashboard(AuthUser(user): AuthUser) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        success: true,
        message: "Welcome to the dashboard".to_string(),
        user: user.into(),
    })
}
