/**
 * Blog Post Repository
 *
 * CRUD and lifecycle operations for blog posts. Every write runs
 * validate → sanitize before touching the store.
 *
 * # Publish Lifecycle
 *
 * `published_at` is set once, at the first transition into `published`
 * (on create, update or publish). Unpublishing moves the post back to
 * `draft` and keeps the original `published_at`.
 */

use chrono::Utc;

use crate::backend::db::{Conditions, Database, Statement};
use crate::backend::error::BackendError;
use crate::shared::models::{
    BlogPost, BlogPostFilter, BlogPostInput, BlogSortField, BlogStats, PostStatus, SortOrder,
};
use crate::shared::validation::{clean, Validate};

const POST_SELECT: &str = "SELECT bp.id, bp.title, bp.content, bp.excerpt, bp.thumbnail, bp.author_id, \
     COALESCE(u.username, '') AS author_name, bp.status, bp.category, bp.tags, bp.view_count, \
     bp.created_at, bp.updated_at, bp.published_at \
     FROM blog_posts bp LEFT JOIN users u ON bp.author_id = u.id";

#[derive(Debug, Clone)]
pub struct BlogRepository {
    db: Database,
}

impl BlogRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Validate, sanitize and insert a post
    ///
    /// # Errors
    ///
    /// * `Validation` - blank title/content, missing author, bad status, or
    ///   an `author_id` with no matching user
    pub async fn create(&self, input: BlogPostInput) -> Result<BlogPost, BackendError> {
        let post = input.validate()?.sanitize().into_inner();
        let now = Utc::now();
        let published_at = (post.status == PostStatus::Published).then_some(now);

        let mut stmt = self.db.statement();
        stmt.push(
            "INSERT INTO blog_posts (title, content, excerpt, thumbnail, author_id, status, \
             category, tags, view_count, created_at, updated_at, published_at) VALUES (",
        )
        .push_bind(post.title)
        .push(", ")
        .push_bind(post.content)
        .push(", ")
        .push_bind(post.excerpt)
        .push(", ")
        .push_bind(post.thumbnail)
        .push(", ")
        .push_bind(post.author_id)
        .push(", ")
        .push_bind(post.status.as_str())
        .push(", ")
        .push_bind(post.category)
        .push(", ")
        .push_bind(post.tags)
        .push(", 0, ")
        .push_bind(now)
        .push(", ")
        .push_bind(now)
        .push(", ")
        .push_bind(published_at)
        .push(")")
        .push(self.db.dialect().returning_id());

        let id = self.db.insert(&stmt).await?;
        tracing::info!("Created blog post {}", id);
        self.get_by_id(id).await
    }

    /// Replace a post's editable fields
    ///
    /// The author, view count and creation time are kept from the stored
    /// post regardless of the input.
    pub async fn update(&self, id: i64, mut input: BlogPostInput) -> Result<BlogPost, BackendError> {
        let existing = self.get_by_id(id).await?;
        input.author_id = existing.author_id;

        let post = input.validate()?.sanitize().into_inner();
        let now = Utc::now();
        let first_publish = (post.status == PostStatus::Published).then_some(now);

        let mut stmt = self.db.statement();
        stmt.push("UPDATE blog_posts SET title = ")
            .push_bind(post.title)
            .push(", content = ")
            .push_bind(post.content)
            .push(", excerpt = ")
            .push_bind(post.excerpt)
            .push(", thumbnail = ")
            .push_bind(post.thumbnail)
            .push(", status = ")
            .push_bind(post.status.as_str())
            .push(", category = ")
            .push_bind(post.category)
            .push(", tags = ")
            .push_bind(post.tags)
            .push(", updated_at = ")
            .push_bind(now)
            .push(", published_at = COALESCE(published_at, ")
            .push_bind(first_publish)
            .push(") WHERE id = ")
            .push_bind(id);

        self.execute_on(id, &stmt).await?;
        tracing::info!("Updated blog post {}", id);
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), BackendError> {
        let mut stmt = self.db.statement();
        stmt.push("DELETE FROM blog_posts WHERE id = ").push_bind(id);

        self.execute_on(id, &stmt).await?;
        tracing::info!("Deleted blog post {}", id);
        Ok(())
    }

    /// Fetch one post, any status, with its author's username
    pub async fn get_by_id(&self, id: i64) -> Result<BlogPost, BackendError> {
        let mut stmt = self.db.statement();
        stmt.push(POST_SELECT).push(" WHERE bp.id = ").push_bind(id);

        self.db
            .fetch_optional(&stmt)
            .await?
            .ok_or(BackendError::NotFound("blog post"))
    }

    /// Filtered, sorted, paginated listing
    ///
    /// Defaults to newest first. Offset only applies together with a limit.
    pub async fn list(&self, filter: &BlogPostFilter) -> Result<Vec<BlogPost>, BackendError> {
        let mut stmt = self.db.statement();
        stmt.push(POST_SELECT);

        let mut conds = Conditions::new();
        if let Some(status) = filter.status {
            conds.next(&mut stmt).push("bp.status = ").push_bind(status.as_str());
        }
        // Filter values are compared in their stored, escaped form
        if let Some(category) = &filter.category {
            conds.next(&mut stmt).push("bp.category = ").push_bind(clean(category));
        }
        if let Some(author_id) = filter.author_id {
            conds.next(&mut stmt).push("bp.author_id = ").push_bind(author_id);
        }
        if let Some(search) = filter.search.as_deref().map(clean) {
            conds.next(&mut stmt).push("(");
            stmt.push_contains("bp.title", &search)
                .push(" OR ")
                .push_contains("bp.content", &search)
                .push(")");
        }

        let column = filter.sort_by.unwrap_or(BlogSortField::CreatedAt).column();
        let order = filter.sort_order.unwrap_or(SortOrder::Desc).as_sql();
        stmt.push(&format!(" ORDER BY bp.{} {}, bp.id {}", column, order, order));

        if let Some(limit) = filter.limit {
            stmt.push(" LIMIT ").push_bind(limit);
            if let Some(offset) = filter.offset.filter(|o| *o > 0) {
                stmt.push(" OFFSET ").push_bind(offset);
            }
        }

        Ok(self.db.fetch_all(&stmt).await?)
    }

    /// Add one view in a single atomic statement
    pub async fn increment_view_count(&self, id: i64) -> Result<(), BackendError> {
        let mut stmt = self.db.statement();
        stmt.push("UPDATE blog_posts SET view_count = view_count + 1 WHERE id = ")
            .push_bind(id);

        self.execute_on(id, &stmt).await
    }

    /// Move a post to `published`, stamping `published_at` only the first time
    pub async fn publish(&self, id: i64) -> Result<BlogPost, BackendError> {
        let now = Utc::now();
        let mut stmt = self.db.statement();
        stmt.push("UPDATE blog_posts SET status = ")
            .push_bind(PostStatus::Published.as_str())
            .push(", updated_at = ")
            .push_bind(now)
            .push(", published_at = COALESCE(published_at, ")
            .push_bind(now)
            .push(") WHERE id = ")
            .push_bind(id);

        self.execute_on(id, &stmt).await?;
        tracing::info!("Published blog post {}", id);
        self.get_by_id(id).await
    }

    /// Move a post back to `draft`
    pub async fn unpublish(&self, id: i64) -> Result<BlogPost, BackendError> {
        let mut stmt = self.db.statement();
        stmt.push("UPDATE blog_posts SET status = ")
            .push_bind(PostStatus::Draft.as_str())
            .push(", updated_at = ")
            .push_bind(Utc::now())
            .push(" WHERE id = ")
            .push_bind(id);

        self.execute_on(id, &stmt).await?;
        tracing::info!("Unpublished blog post {}", id);
        self.get_by_id(id).await
    }

    /// Totals across all posts; an empty table yields zeros
    pub async fn stats(&self) -> Result<BlogStats, BackendError> {
        let mut stmt = self.db.statement();
        stmt.push("SELECT CAST(COUNT(*) AS BIGINT) AS total_posts, ")
            .push("CAST(COALESCE(SUM(CASE WHEN status = ")
            .push_bind(PostStatus::Published.as_str())
            .push(" THEN 1 ELSE 0 END), 0) AS BIGINT) AS published_posts, ")
            .push("CAST(COALESCE(SUM(CASE WHEN status = ")
            .push_bind(PostStatus::Draft.as_str())
            .push(" THEN 1 ELSE 0 END), 0) AS BIGINT) AS draft_posts, ")
            .push("CAST(COALESCE(SUM(view_count), 0) AS BIGINT) AS total_views ")
            .push("FROM blog_posts");

        Ok(self.db.fetch_one(&stmt).await?)
    }

    /// Run a statement that must touch the row `id`
    async fn execute_on(&self, id: i64, stmt: &Statement) -> Result<(), BackendError> {
        if self.db.execute(stmt).await? == 0 {
            tracing::debug!("No blog post with id {}", id);
            return Err(BackendError::NotFound("blog post"));
        }
        Ok(())
    }
}
