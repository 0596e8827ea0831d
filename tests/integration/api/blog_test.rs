//! Blog API tests

use axum::http::{Method, StatusCode};
use clinic_backend::backend::routes::create_router;
use serde_json::json;

use crate::common::{create_admin, create_patient, get, post, send, test_state, token_for};

#[tokio::test]
async fn test_admin_post_lifecycle() {
    let state = test_state().await;
    let admin = create_admin(&state).await;
    let token = token_for(&state, &admin);
    let app = create_router(state);

    let created = post(
        &app,
        "/api/blog/manage/posts",
        Some(&token),
        json!({"title": "Flu season", "content": "Wash your hands", "category": "Tin tức y tế"}),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "Blog post created successfully");
    assert_eq!(created.body["data"]["author_id"], admin.id);
    assert_eq!(created.body["data"]["status"], "draft");
    let id = created.body["data"]["id"].as_i64().unwrap();

    // Drafts are invisible to the public
    let hidden = get(&app, &format!("/api/blog/posts/{}", id), None).await;
    assert_eq!(hidden.status, StatusCode::NOT_FOUND);

    let published = send(
        &app,
        Method::POST,
        &format!("/api/blog/manage/posts/{}/publish", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(published.status, StatusCode::OK);
    assert_eq!(published.body["data"]["status"], "published");

    let listed = get(&app, "/api/blog/posts", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"][0]["title"], "Flu season");
    assert_eq!(listed.body["data"][0]["content"], "");

    let viewed = get(&app, &format!("/api/blog/posts/{}?increment_view=true", id), None).await;
    assert_eq!(viewed.status, StatusCode::OK);
    assert_eq!(viewed.body["data"]["view_count"], 1);
    assert_eq!(viewed.body["data"]["content"], "Wash your hands");

    let stats = get(&app, "/api/blog/manage/stats", Some(&token)).await;
    assert_eq!(
        stats.body["data"],
        json!({"total_posts": 1, "published_posts": 1, "draft_posts": 0, "total_views": 1})
    );

    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/blog/manage/posts/{}", id),
        Some(&token),
        Some(json!({"title": "Flu season 2026", "content": "Get vaccinated", "status": "published"})),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["title"], "Flu season 2026");

    let deleted = send(
        &app,
        Method::DELETE,
        &format!("/api/blog/manage/posts/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Blog post deleted successfully");

    let gone = get(&app, &format!("/api/blog/manage/posts/{}", id), Some(&token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_manage_routes_need_admin() {
    let state = test_state().await;
    let patient = create_patient(&state, "alice").await;
    let token = token_for(&state, &patient);
    let app = create_router(state);

    let anonymous = get(&app, "/api/blog/manage/posts", None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let forbidden = post(
        &app,
        "/api/blog/manage/posts",
        Some(&token),
        json!({"title": "Mine", "content": "Nope"}),
    )
    .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(forbidden.body["success"], false);
}

#[tokio::test]
async fn test_bad_input() {
    let state = test_state().await;
    let admin = create_admin(&state).await;
    let token = token_for(&state, &admin);
    let app = create_router(state);

    let blank = post(
        &app,
        "/api/blog/manage/posts",
        Some(&token),
        json!({"title": "   ", "content": "Body"}),
    )
    .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.body["field"], "title");

    let bad_status = get(&app, "/api/blog/manage/posts?status=deleted", Some(&token)).await;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);

    let bad_id = get(&app, "/api/blog/posts/abc", None).await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_categories() {
    let app = create_router(test_state().await);

    let response = get(&app, "/api/blog/categories", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let categories = response.body["data"].as_array().unwrap();
    assert_eq!(categories.len(), 14);
    assert_eq!(categories[0], "Sức khỏe tổng quát");
}
