/**
 * Router Configuration
 *
 * Combines every route into one Axum router.
 *
 * # Route Groups
 *
 * 1. **Public** - health, register, login, published blog posts
 * 2. **Protected** - everything behind `auth_middleware`; admin-only
 *    handlers additionally extract [`AdminUser`](crate::backend::middleware::AdminUser)
 *
 * # Layers
 *
 * Outermost first: permissive CORS, `x-request-id` assignment, HTTP
 * tracing, `x-request-id` propagation to the response.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::backend::auth::{dashboard, login, register};
use crate::backend::blog::handlers as blog;
use crate::backend::doctors::handlers as doctors;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::health::health;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// ## Public
///
/// - `GET /api/health`
/// - `POST /api/register`, `POST /api/login`
/// - `GET /api/blog/posts`, `GET /api/blog/posts/{id}`, `GET /api/blog/categories`
///
/// ## Logged-in users
///
/// - `GET /api/dashboard`
/// - `GET /api/doctors`, `GET /api/doctors/specialties`, `GET /api/doctors/{id}`
///
/// ## Admins
///
/// - `/api/blog/manage/...`
/// - `POST /api/doctors`, `PUT|DELETE /api/doctors/{id}`
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/health", get(health))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/blog/posts", get(blog::list_published_posts))
        .route("/api/blog/posts/{id}", get(blog::get_published_post))
        .route("/api/blog/categories", get(blog::list_categories));

    let protected = Router::new()
        .route("/api/dashboard", get(dashboard))
        .route(
            "/api/blog/manage/posts",
            get(blog::list_posts).post(blog::create_post),
        )
        .route(
            "/api/blog/manage/posts/{id}",
            get(blog::get_post)
                .put(blog::update_post)
                .delete(blog::delete_post),
        )
        .route("/api/blog/manage/posts/{id}/publish", post(blog::publish_post))
        .route("/api/blog/manage/posts/{id}/unpublish", post(blog::unpublish_post))
        .route("/api/blog/manage/stats", get(blog::blog_stats))
        .route(
            "/api/doctors",
            get(doctors::list_doctors).post(doctors::create_doctor),
        )
        .route("/api/doctors/specialties", get(doctors::list_specialties))
        .route(
            "/api/doctors/{id}",
            get(doctors::get_doctor)
                .put(doctors::update_doctor)
                .delete(doctors::delete_doctor),
        )
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    public
        .merge(protected)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
