//! Entity Models
//!
//! Persisted record types (users, blog posts, doctors), the raw inputs they
//! are built from, and the listing filters used to query them.

pub mod blog;
pub mod doctor;
pub mod user;

use serde::{Deserialize, Serialize};

pub use blog::{
    BlogPost, BlogPostDraft, BlogPostFilter, BlogPostInput, BlogPostQuery, BlogSortField,
    BlogStats, PostStatus,
};
pub use doctor::{
    Doctor, DoctorDraft, DoctorFilter, DoctorInput, DoctorQuery, DoctorSortField, DoctorStatus,
};
pub use user::{NewUser, Role, User, UserCredentials};

/// Direction of an ORDER BY
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Lenient parse used for query strings; anything unrecognised is ignored
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Treat empty query parameters as absent
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Query-string integers: unparsable or out-of-range values are ignored
pub(crate) fn parse_bounded(value: Option<&str>, min: i64) -> Option<i64> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= min)
}
