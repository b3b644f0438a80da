use crate::db::PostStore;
use crate::error::Result;
use crate::models::{CommentRow, CommentSelection, PostRow};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed post store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn count_posts(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list_posts(&self, limit: i64, offset: i64) -> Result<Vec<PostRow>> {
        let posts = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT p.id, p.content AS text, p.created_at AS "timestamp",
                   u.username AS author,
                   COALESCE(c.comment_count, 0) AS comment_count
            FROM posts p
            JOIN users u ON u.id = p.user_id
            LEFT JOIN (
                SELECT post_id, COUNT(*) AS comment_count
                FROM comments
                GROUP BY post_id
            ) c ON c.post_id = p.id
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn list_comments(
        &self,
        post_ids: &[Uuid],
        selection: CommentSelection,
        per_post: i64,
    ) -> Result<Vec<CommentRow>> {
        if post_ids.is_empty() || per_post <= 0 {
            return Ok(Vec::new());
        }

        let window_order = match selection {
            CommentSelection::Recent => "c.created_at DESC, c.id DESC",
            CommentSelection::Random => "random()",
        };

        let query = format!(
            r#"
            SELECT ranked.id, ranked.post_id, ranked.text, ranked."timestamp", ranked.author
            FROM (
                SELECT c.id, c.post_id, c.content AS text, c.created_at AS "timestamp",
                       u.username AS author,
                       ROW_NUMBER() OVER (PARTITION BY c.post_id ORDER BY {}) AS rn
                FROM comments c
                JOIN users u ON u.id = c.user_id
                WHERE c.post_id = ANY($1)
            ) ranked
            WHERE ranked.rn <= $2
            ORDER BY ranked.post_id, ranked."timestamp" DESC, ranked.id DESC
            "#,
            window_order
        );

        let comments = sqlx::query_as::<_, CommentRow>(&query)
            .bind(post_ids)
            .bind(per_post)
            .fetch_all(&self.pool)
            .await?;

        Ok(comments)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
