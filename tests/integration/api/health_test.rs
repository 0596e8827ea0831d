//! Health endpoint tests

use axum::http::StatusCode;
use clinic_backend::backend::routes::create_router;

use crate::common::{get, test_state};

#[tokio::test]
async fn test_health_ok() {
    let app = create_router(test_state().await);

    let response = get(&app, "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "ok");
    assert_eq!(response.body["dialect"], "sqlite");
}

#[tokio::test]
async fn test_health_reports_closed_store() {
    let state = test_state().await;
    state.db.close().await;
    let app = create_router(state);

    let response = get(&app, "/api/health", None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["database"], "unavailable");
}
