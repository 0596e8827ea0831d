//! Blog post validation

use crate::shared::error::SharedError;
use crate::shared::models::{BlogPostDraft, BlogPostInput, PostStatus};
use crate::shared::validation::{clean, require, Sanitized, Validate, Validated};

/// Length of a derived excerpt, in characters, before the ellipsis
pub const EXCERPT_CHARS: usize = 200;

impl Validate for BlogPostInput {
    type Output = BlogPostDraft;

    fn validate(self) -> Result<Validated<BlogPostDraft>, SharedError> {
        require("title", &self.title)?;
        require("content", &self.content)?;

        if self.author_id <= 0 {
            return Err(SharedError::validation("author_id", "author_id is required"));
        }

        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => PostStatus::default(),
            Some(s) => s
                .parse()
                .map_err(|_| SharedError::validation("status", format!("invalid status '{}'", s)))?,
        };

        Ok(Validated::new(BlogPostDraft {
            title: self.title,
            content: self.content,
            excerpt: self.excerpt.unwrap_or_default(),
            thumbnail: self.thumbnail.unwrap_or_default(),
            author_id: self.author_id,
            status,
            category: self.category.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
        }))
    }
}

impl Validated<BlogPostDraft> {
    /// Clean every free-text field; derive the excerpt when none was given
    pub fn sanitize(self) -> Sanitized<BlogPostDraft> {
        let draft = self.into_inner();

        let excerpt = if draft.excerpt.trim().is_empty() {
            clean(&derive_excerpt(draft.content.trim()))
        } else {
            clean(&draft.excerpt)
        };

        Sanitized::new(BlogPostDraft {
            title: clean(&draft.title),
            content: clean(&draft.content),
            excerpt,
            thumbnail: clean(&draft.thumbnail),
            author_id: draft.author_id,
            status: draft.status,
            category: clean(&draft.category),
            tags: clean(&draft.tags),
        })
    }
}

/// First [`EXCERPT_CHARS`] characters plus `...`; empty when the text fits
fn derive_excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => String::new(),
    }
}
