/// Post feed service - assembles one page of posts with their capped comments
use crate::db::PostStore;
use crate::error::Result;
use crate::metrics::posts::{POSTS_LIST_COMMENTS_RETURNED, POSTS_LIST_DURATION_SECONDS};
use crate::models::{CommentSelection, PostListResponse, PostView};
use crate::services::comments::CommentFetcher;
use crate::services::pagination::{Paginator, POSTS_PER_PAGE};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostFeedService {
    store: Arc<dyn PostStore>,
    comments: CommentFetcher,
}

impl PostFeedService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            comments: CommentFetcher::new(store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &Arc<dyn PostStore> {
        &self.store
    }

    /// Build the page named by the raw `page` parameter.
    ///
    /// Issues at most three queries regardless of page contents: the post
    /// count, the page of posts, and the comments for all of them.
    pub async fn list_page(
        &self,
        raw_page: Option<&str>,
        selection: CommentSelection,
    ) -> Result<PostListResponse> {
        let started = Instant::now();

        // Count and page are separate statements with no shared snapshot; a
        // concurrent write between them only shortens or lengthens the page.
        let total = self.store.count_posts().await?;
        let paginator = Paginator::new(total, POSTS_PER_PAGE);
        let window = paginator.resolve(raw_page);

        let rows = if paginator.items_on(&window) == 0 {
            Vec::new()
        } else {
            self.store.list_posts(window.limit, window.offset).await?
        };

        let post_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut comments = self.comments.fetch_for_posts(&post_ids, selection).await?;

        let posts: Vec<PostView> = rows
            .into_iter()
            .map(|row| {
                let post_comments = comments.remove(&row.id).unwrap_or_default();
                PostView::from_row(row, post_comments)
            })
            .collect();

        let rendered_comments: usize = posts.iter().map(|p| p.comments.len()).sum();
        POSTS_LIST_COMMENTS_RETURNED.observe(rendered_comments as f64);
        POSTS_LIST_DURATION_SECONDS
            .with_label_values(&[selection.as_str()])
            .observe(started.elapsed().as_secs_f64());

        debug!(
            requested = ?raw_page,
            page = window.number,
            num_pages = window.num_pages,
            posts = posts.len(),
            comments = rendered_comments,
            mode = selection.as_str(),
            "Assembled post list page"
        );

        Ok(PostListResponse {
            posts,
            num_pages: window.num_pages,
            current_page: window.number,
            has_next: window.has_next,
        })
    }
}
