/// Database access layer
///
/// `PostStore` is the seam between the listing pipeline and PostgreSQL.
/// Implementations must resolve authors and comment counts in batched
/// queries: one call per page, never one per post.
pub mod post_repo;

pub use post_repo::PgPostStore;

use crate::error::Result;
use crate::models::{CommentRow, CommentSelection, PostRow};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Total number of posts in the feed
    async fn count_posts(&self) -> Result<i64>;

    /// Posts newest-first with author and comment count already joined
    async fn list_posts(&self, limit: i64, offset: i64) -> Result<Vec<PostRow>>;

    /// Up to `per_post` comments for every post in `post_ids`, with authors.
    /// `Recent` picks the newest comments, `Random` a uniform sample.
    async fn list_comments(
        &self,
        post_ids: &[Uuid],
        selection: CommentSelection,
        per_post: i64,
    ) -> Result<Vec<CommentRow>>;

    /// Cheap connectivity probe
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
