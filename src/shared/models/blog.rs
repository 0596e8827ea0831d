//! Blog Post Data Structures
//!
//! Content records for the clinic's public blog, plus the filter used by
//! the listing endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::error::SharedError;
use crate::shared::models::{non_empty, parse_bounded, SortOrder};

/// Publication state of a blog post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Not visible on the public blog
    Draft,
    /// Visible on the public blog
    Published,
    /// Retired, kept for reference
    Archived,
}

impl Default for PostStatus {
    fn default() -> Self {
        PostStatus::Draft
    }
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

impl FromStr for PostStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            "archived" => Ok(PostStatus::Archived),
            other => Err(SharedError::unknown("post status", other)),
        }
    }
}

impl TryFrom<String> for PostStatus {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A stored blog post, with the author's username joined in
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub author_id: i64,
    pub author_name: String,
    #[cfg_attr(feature = "ssr", sqlx(try_from = "String"))]
    pub status: PostStatus,
    pub category: String,
    /// Comma-separated free text
    pub tags: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Raw create/update payload as submitted by a client
///
/// `author_id` of 0 means "not provided"; the HTTP layer fills it in from
/// the authenticated user before validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlogPostInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub author_id: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

/// A post that passed validation, and after sanitization, the exact values
/// written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub author_id: i64,
    pub status: PostStatus,
    pub category: String,
    pub tags: String,
}

/// Columns a post listing may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogSortField {
    Title,
    CreatedAt,
    UpdatedAt,
    ViewCount,
    PublishedAt,
}

impl BlogSortField {
    pub fn column(&self) -> &'static str {
        match self {
            BlogSortField::Title => "title",
            BlogSortField::CreatedAt => "created_at",
            BlogSortField::UpdatedAt => "updated_at",
            BlogSortField::ViewCount => "view_count",
            BlogSortField::PublishedAt => "published_at",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(BlogSortField::Title),
            "created_at" => Some(BlogSortField::CreatedAt),
            "updated_at" => Some(BlogSortField::UpdatedAt),
            "view_count" => Some(BlogSortField::ViewCount),
            "published_at" => Some(BlogSortField::PublishedAt),
            _ => None,
        }
    }
}

/// Typed listing filter for blog posts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostFilter {
    pub status: Option<PostStatus>,
    pub category: Option<String>,
    pub author_id: Option<i64>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort_by: Option<BlogSortField>,
    pub sort_order: Option<SortOrder>,
}

/// Blog listing query string, exactly as received
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub author_id: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl BlogPostQuery {
    /// Convert into a filter
    ///
    /// Malformed paging and sorting parameters are dropped; an unknown
    /// status is rejected because silently ignoring it would widen the
    /// result set.
    pub fn into_filter(self, default_limit: i64) -> Result<BlogPostFilter, SharedError> {
        let status = non_empty(self.status)
            .map(|s| s.trim().parse::<PostStatus>())
            .transpose()?;

        Ok(BlogPostFilter {
            status,
            category: non_empty(self.category),
            author_id: parse_bounded(self.author_id.as_deref(), 1),
            search: non_empty(self.search),
            limit: parse_bounded(self.limit.as_deref(), 1).or(Some(default_limit)),
            offset: parse_bounded(self.offset.as_deref(), 0),
            sort_by: self.sort_by.as_deref().and_then(BlogSortField::parse),
            sort_order: self.sort_order.as_deref().and_then(SortOrder::parse),
        })
    }
}

/// Aggregate counters over all posts
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogStats {
    pub total_posts: i64,
    pub published_posts: i64,
    pub draft_posts: i64,
    pub total_views: i64,
}
