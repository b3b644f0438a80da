/// Business logic layer for posts-service
///
/// - Pagination: page number normalization and page windows
/// - Comments: capped, newest-first comment subsets per post
/// - Feed: assembly of a full post list page
pub mod comments;
pub mod feed;
pub mod pagination;

pub use comments::{CommentFetcher, COMMENTS_PER_POST};
pub use feed::PostFeedService;
pub use pagination::{PageWindow, Paginator, POSTS_PER_PAGE};
