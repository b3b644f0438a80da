/// Data models for posts-service
///
/// Rows are what the store hands back (already joined with authors and the
/// comment aggregate); views are the fixed JSON shapes returned to clients.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Post row joined with its author's username and aggregated comment count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub comment_count: i64,
}

/// Comment row joined with its author's username
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentRow {
    pub id: Uuid,
    pub post_id: Uuid,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
}

/// How the capped comment subset of a post is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSelection {
    /// Most recent comments first
    #[default]
    Recent,
    /// Uniform sample without replacement
    Random,
}

impl CommentSelection {
    /// `random=true` (any case) selects sampling; anything else is recency.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("true") => CommentSelection::Random,
            _ => CommentSelection::Recent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentSelection::Recent => "recent",
            CommentSelection::Random => "random",
        }
    }
}

/// Comment as rendered inside a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentView {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
}

impl From<CommentRow> for CommentView {
    fn from(row: CommentRow) -> Self {
        Self {
            text: row.text,
            timestamp: row.timestamp,
            author: row.author,
        }
    }
}

/// Post as rendered in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostView {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub comment_count: i64,
    pub comments: Vec<CommentView>,
    pub author: String,
}

impl PostView {
    pub fn from_row(row: PostRow, comments: Vec<CommentView>) -> Self {
        Self {
            text: row.text,
            timestamp: row.timestamp,
            comment_count: row.comment_count,
            comments,
            author: row.author,
        }
    }
}

/// One page of the post feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostListResponse {
    pub posts: Vec<PostView>,
    pub num_pages: u64,
    pub current_page: u64,
    pub has_next: bool,
}

/// Body returned for any internal failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
