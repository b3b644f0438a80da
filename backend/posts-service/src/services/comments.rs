/// Comment fetcher - resolves the capped comment subset shown under each post
use crate::db::PostStore;
use crate::error::Result;
use crate::models::{CommentRow, CommentSelection, CommentView};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Maximum number of comments rendered under a post
pub const COMMENTS_PER_POST: usize = 3;

#[derive(Clone)]
pub struct CommentFetcher {
    store: Arc<dyn PostStore>,
}

impl CommentFetcher {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Capped comments for a single post
    pub async fn fetch_comments(
        &self,
        post_id: Uuid,
        selection: CommentSelection,
    ) -> Result<Vec<CommentView>> {
        let mut by_post = self.fetch_for_posts(&[post_id], selection).await?;
        Ok(by_post.remove(&post_id).unwrap_or_default())
    }

    /// Capped comments for every post on a page, in a single store round-trip.
    ///
    /// Posts without comments are absent from the returned map.
    pub async fn fetch_for_posts(
        &self,
        post_ids: &[Uuid],
        selection: CommentSelection,
    ) -> Result<HashMap<Uuid, Vec<CommentView>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = self
            .store
            .list_comments(post_ids, selection, COMMENTS_PER_POST as i64)
            .await?;

        Ok(group_newest_first(rows))
    }
}

/// Group rows by post, newest first, at most `COMMENTS_PER_POST` each.
///
/// Selection already happened in the store; this only fixes the display
/// order so random samples render the same way recent ones do.
pub fn group_newest_first(rows: Vec<CommentRow>) -> HashMap<Uuid, Vec<CommentView>> {
    let mut grouped: HashMap<Uuid, Vec<CommentRow>> = HashMap::new();
    for row in rows {
        grouped.entry(row.post_id).or_default().push(row);
    }

    grouped
        .into_iter()
        .map(|(post_id, mut comments)| {
            comments.sort_by_key(|c| Reverse((c.timestamp, c.id)));
            comments.truncate(COMMENTS_PER_POST);
            (post_id, comments.into_iter().map(CommentView::from).collect())
        })
        .collect()
}
