//! Blog repository tests

use assert_matches::assert_matches;
use clinic_backend::backend::BackendError;
use clinic_backend::shared::models::{
    BlogPostFilter, BlogPostInput, BlogSortField, BlogStats, PostStatus, SortOrder,
};
use pretty_assertions::assert_eq;

use crate::common::{create_patient, test_state};

fn input(author_id: i64, title: &str) -> BlogPostInput {
    BlogPostInput {
        title: title.to_string(),
        content: format!("Body of {}", title),
        author_id,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_defaults_and_author_name() {
    let state = test_state().await;
    let author = create_patient(&state, "writer").await;

    let post = state.posts.create(input(author.id, "Hello")).await.unwrap();
    assert_eq!(post.status, PostStatus::Draft);
    assert_eq!(post.author_name, "writer");
    assert_eq!(post.view_count, 0);
    assert_eq!(post.excerpt, "");
    assert_eq!(post.published_at, None);
}

#[tokio::test]
async fn test_long_content_gets_truncated_excerpt() {
    let state = test_state().await;
    let author = create_patient(&state, "writer").await;

    let mut long = input(author.id, "Long");
    long.content = "a".repeat(201);
    let post = state.posts.create(long).await.unwrap();

    assert_eq!(post.excerpt, format!("{}...", "a".repeat(200)));
}

#[tokio::test]
async fn test_unknown_author_is_a_validation_error() {
    let state = test_state().await;

    let err = state.posts.create(input(999, "Orphan")).await.unwrap_err();
    assert_matches!(err, BackendError::Validation(_));
    assert_eq!(err.field(), Some("author_id"));
}

#[tokio::test]
async fn test_publish_sets_published_at_once() {
    let state = test_state().await;
    let author = create_patient(&state, "writer").await;
    let post = state.posts.create(input(author.id, "Lifecycle")).await.unwrap();

    let first = state.posts.publish(post.id).await.unwrap();
    assert_eq!(first.status, PostStatus::Published);
    let published_at = first.published_at.expect("published_at set");

    let second = state.posts.publish(post.id).await.unwrap();
    assert_eq!(second.published_at, Some(published_at));

    let draft = state.posts.unpublish(post.id).await.unwrap();
    assert_eq!(draft.status, PostStatus::Draft);
    assert_eq!(draft.published_at, Some(published_at));
}

#[tokio::test]
async fn test_update_keeps_author_and_stamps_publish() {
    let state = test_state().await;
    let author = create_patient(&state, "writer").await;
    let other = create_patient(&state, "other").await;
    let post = state.posts.create(input(author.id, "Draft")).await.unwrap();

    let mut change = input(other.id, "Edited");
    change.status = Some("published".into());
    let updated = state.posts.update(post.id, change).await.unwrap();

    assert_eq!(updated.title, "Edited");
    assert_eq!(updated.author_id, author.id);
    assert_eq!(updated.status, PostStatus::Published);
    assert!(updated.published_at.is_some());
    assert_eq!(updated.created_at, post.created_at);
}

#[tokio::test]
async fn test_missing_post() {
    let state = test_state().await;
    let author = create_patient(&state, "writer").await;

    assert_matches!(state.posts.get_by_id(42).await, Err(BackendError::NotFound(_)));
    assert_matches!(state.posts.delete(42).await, Err(BackendError::NotFound(_)));
    assert_matches!(
        state.posts.increment_view_count(42).await,
        Err(BackendError::NotFound(_))
    );
    assert_matches!(
        state.posts.update(42, input(author.id, "Nope")).await,
        Err(BackendError::NotFound(_))
    );
}

#[tokio::test]
async fn test_delete() {
    let state = test_state().await;
    let author = create_patient(&state, "writer").await;
    let post = state.posts.create(input(author.id, "Gone")).await.unwrap();

    state.posts.delete(post.id).await.unwrap();
    assert_matches!(state.posts.get_by_id(post.id).await, Err(BackendError::NotFound(_)));
}

#[tokio::test]
async fn test_stats() {
    let state = test_state().await;
    assert_eq!(state.posts.stats().await.unwrap(), BlogStats::default());

    let author = create_patient(&state, "writer").await;
    let a = state.posts.create(input(author.id, "A")).await.unwrap();
    state.posts.create(input(author.id, "B")).await.unwrap();
    state.posts.publish(a.id).await.unwrap();
    state.posts.increment_view_count(a.id).await.unwrap();
    state.posts.increment_view_count(a.id).await.unwrap();

    assert_eq!(
        state.posts.stats().await.unwrap(),
        BlogStats {
            total_posts: 2,
            published_posts: 1,
            draft_posts: 1,
            total_views: 2,
        }
    );
}

#[tokio::test]
async fn test_list_filters_and_sorting() {
    let state = test_state().await;
    let author = create_patient(&state, "writer").await;

    for (title, category) in [("Heart care", "Tim mạch"), ("Skin care", "Da liễu"), ("Apple diet", "Dinh dưỡng")] {
        let mut post = input(author.id, title);
        post.category = Some(category.into());
        state.posts.create(post).await.unwrap();
    }

    let newest_first = state.posts.list(&BlogPostFilter::default()).await.unwrap();
    let titles: Vec<_> = newest_first.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple diet", "Skin care", "Heart care"]);

    let by_title = state
        .posts
        .list(&BlogPostFilter {
            sort_by: Some(BlogSortField::Title),
            sort_order: Some(SortOrder::Asc),
            limit: Some(2),
            offset: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    let titles: Vec<_> = by_title.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Heart care", "Skin care"]);

    let searched = state
        .posts
        .list(&BlogPostFilter {
            search: Some("CARE".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(searched.len(), 2);

    let by_category = state
        .posts
        .list(&BlogPostFilter {
            category: Some("Da liễu".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].title, "Skin care");

    let published = state
        .posts
        .list(&BlogPostFilter {
            status: Some(PostStatus::Published),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(published.is_empty());
}

#[tokio::test]
async fn test_filters_match_stored_text_literally() {
    let state = test_state().await;
    let author = create_patient(&state, "writer").await;

    let mut qa = input(author.id, "Q&A: 100% recovery");
    qa.category = Some("Mẹ & Bé".into());
    state.posts.create(qa).await.unwrap();
    state.posts.create(input(author.id, "1000 tips")).await.unwrap();

    let search = |needle: &str| BlogPostFilter {
        search: Some(needle.into()),
        ..Default::default()
    };

    let ampersand = state.posts.list(&search("Q&A")).await.unwrap();
    assert_eq!(ampersand.len(), 1);
    assert_eq!(ampersand[0].title, "Q&amp;A: 100% recovery");

    let percent = state.posts.list(&search("100%")).await.unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "Q&amp;A: 100% recovery");

    assert!(state.posts.list(&search("_")).await.unwrap().is_empty());

    let by_category = state
        .posts
        .list(&BlogPostFilter {
            category: Some(" Mẹ & Bé ".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_category.len(), 1);
}

#[tokio::test]
async fn test_escaping_can_outgrow_raw_length() {
    let state = test_state().await;
    let author = create_patient(&state, "writer").await;

    let post = state
        .posts
        .create(input(author.id, &"<".repeat(255)))
        .await
        .unwrap();

    assert_eq!(post.title, "&lt;".repeat(255));
    assert_eq!(post.title.len(), 1020);
}
