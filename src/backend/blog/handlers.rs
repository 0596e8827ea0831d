/**
 * Blog HTTP Handlers
 *
 * # Public
 *
 * - `GET /api/blog/posts` - published posts, newest first, without content
 * - `GET /api/blog/posts/{id}` - one published post; `?increment_view=true`
 *   counts a view
 * - `GET /api/blog/categories` - fixed category list
 *
 * # Admin (`/api/blog/manage/...`)
 *
 * - `GET|POST /posts`, `GET|PUT|DELETE /posts/{id}`
 * - `POST /posts/{id}/publish`, `POST /posts/{id}/unpublish`
 * - `GET /stats`
 */

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::backend::blog::repository::BlogRepository;
use crate::backend::error::BackendError;
use crate::backend::extract::{parse_id, ApiJson};
use crate::backend::middleware::AdminUser;
use crate::backend::response::ApiResponse;
use crate::shared::models::{
    BlogPost, BlogPostInput, BlogPostQuery, BlogSortField, BlogStats, PostStatus, SortOrder,
};

/// Default page size for post listings
pub const DEFAULT_POST_LIMIT: i64 = 10;

/// Categories offered by the editor
pub const BLOG_CATEGORIES: [&str; 14] = [
    "Sức khỏe tổng quát",
    "Tim mạch",
    "Tiêu hóa",
    "Thần kinh",
    "Nhi khoa",
    "Phụ khoa",
    "Da liễu",
    "Mắt",
    "Tai mũi họng",
    "Răng hàm mặt",
    "Dinh dưỡng",
    "Tâm lý",
    "Tin tức y tế",
    "Khuyến mãi",
];

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub increment_view: Option<String>,
}

pub async fn list_published_posts(
    State(posts): State<BlogRepository>,
    Query(mut query): Query<BlogPostQuery>,
) -> Result<ApiResponse<Vec<BlogPost>>, BackendError> {
    // Public listings ignore status, author and sorting parameters
    query.status = None;
    query.author_id = None;
    let mut filter = query.into_filter(DEFAULT_POST_LIMIT)?;
    filter.status = Some(PostStatus::Published);
    filter.sort_by = Some(BlogSortField::PublishedAt);
    filter.sort_order = Some(SortOrder::Desc);

    let mut list = posts.list(&filter).await?;
    for post in &mut list {
        post.content.clear();
    }

    Ok(ApiResponse::ok(list))
}

pub async fn get_published_post(
    State(posts): State<BlogRepository>,
    Path(id): Path<String>,
    Query(view): Query<ViewQuery>,
) -> Result<ApiResponse<BlogPost>, BackendError> {
    let id = parse_id(&id)?;
    let mut post = posts.get_by_id(id).await?;
    if post.status != PostStatus::Published {
        return Err(BackendError::NotFound("blog post"));
    }

    if view.increment_view.as_deref() == Some("true") {
        // A failed view count must not fail the read
        match posts.increment_view_count(id).await {
            Ok(()) => post.view_count += 1,
            Err(e) => tracing::warn!("Failed to count view for post {}: {}", id, e),
        }
    }

    Ok(ApiResponse::ok(post))
}

pub async fn list_categories() -> ApiResponse<Vec<&'static str>> {
    ApiResponse::ok(BLOG_CATEGORIES.to_vec())
}

pub async fn list_posts(
    _admin: AdminUser,
    State(posts): State<BlogRepository>,
    Query(query): Query<BlogPostQuery>,
) -> Result<ApiResponse<Vec<BlogPost>>, BackendError> {
    let filter = query.into_filter(DEFAULT_POST_LIMIT)?;
    Ok(ApiResponse::ok(posts.list(&filter).await?))
}

/// Create a post; without an `author_id` the caller becomes the author
pub async fn create_post(
    AdminUser(admin): AdminUser,
    State(posts): State<BlogRepository>,
    ApiJson(mut input): ApiJson<BlogPostInput>,
) -> Result<ApiResponse<BlogPost>, BackendError> {
    if input.author_id == 0 {
        input.author_id = admin.id;
    }
    let post = posts.create(input).await?;
    Ok(ApiResponse::created(post).with_message("Blog post created successfully"))
}

pub async fn get_post(
    _admin: AdminUser,
    State(posts): State<BlogRepository>,
    Path(id): Path<String>,
) -> Result<ApiResponse<BlogPost>, BackendError> {
    Ok(ApiResponse::ok(posts.get_by_id(parse_id(&id)?).await?))
}

pub async fn update_post(
    _admin: AdminUser,
    State(posts): State<BlogRepository>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<BlogPostInput>,
) -> Result<ApiResponse<BlogPost>, BackendError> {
    let post = posts.update(parse_id(&id)?, input).await?;
    Ok(ApiResponse::ok(post).with_message("Blog post updated successfully"))
}

pub async fn delete_post(
    _admin: AdminUser,
    State(posts): State<BlogRepository>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, BackendError> {
    posts.delete(parse_id(&id)?).await?;
    Ok(ApiResponse::message("Blog post deleted successfully"))
}

pub async fn publish_post(
    _admin: AdminUser,
    State(posts): State<BlogRepository>,
    Path(id): Path<String>,
) -> Result<ApiResponse<BlogPost>, BackendError> {
    let post = posts.publish(parse_id(&id)?).await?;
    Ok(ApiResponse::ok(post).with_message("Blog post published successfully"))
}

pub async fn unpublish_post(
    _admin: AdminUser,
    State(posts): State<BlogRepository>,
    Path(id): Path<String>,
) -> Result<ApiResponse<BlogPost>, BackendError> {
    let post = posts.unpublish(parse_id(&id)?).await?;
    Ok(ApiResponse::ok(post).with_message("Blog post unpublished successfully"))
}

pub async fn blog_stats(
    _admin: AdminUser,
    State(posts): State<BlogRepository>,
) -> Result<ApiResponse<BlogStats>, BackendError> {
    Ok(ApiResponse::ok(posts.stats().await?))
}
