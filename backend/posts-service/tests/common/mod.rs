//! In-memory PostStore for HTTP tests
//!
//! Mirrors the PostgreSQL store's ordering and sampling semantics without a
//! database, counts store calls for N+1 verification, and can be told to
//! fail at a given stage to exercise the opaque error path.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use posts_service::db::PostStore;
use posts_service::error::{AppError, Result};
use posts_service::models::{CommentRow, CommentSelection, PostRow};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Count,
    Posts,
    Comments,
    Health,
}

#[derive(Debug, Clone, Default)]
pub struct CallLog {
    pub count_posts: usize,
    pub list_posts: usize,
    pub list_comments: usize,
    pub selections: Vec<CommentSelection>,
}

struct StoredPost {
    id: Uuid,
    user_id: Uuid,
    text: String,
    timestamp: DateTime<Utc>,
}

struct StoredComment {
    id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    text: String,
    timestamp: DateTime<Utc>,
}

pub struct InMemoryPostStore {
    users: HashMap<Uuid, String>,
    posts: Vec<StoredPost>,
    comments: Vec<StoredComment>,
    rng: Mutex<StdRng>,
    fail_on: Option<FailPoint>,
    reported_count: Option<i64>,
    calls: Mutex<CallLog>,
}

/// Fixed reference instant so test data is reproducible
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes)
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::with_seed(7)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            users: HashMap::new(),
            posts: Vec::new(),
            comments: Vec::new(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            fail_on: None,
            reported_count: None,
            calls: Mutex::new(CallLog::default()),
        }
    }

    pub fn failing_on(mut self, point: FailPoint) -> Self {
        self.fail_on = Some(point);
        self
    }

    /// Report `count` from `count_posts` regardless of stored posts, as if
    /// rows were deleted between the count and the page query.
    pub fn reporting_count(mut self, count: i64) -> Self {
        self.reported_count = Some(count);
        self
    }

    pub fn add_user(&mut self, username: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.users.insert(id, username.to_string());
        id
    }

    pub fn add_post(&mut self, user_id: Uuid, text: &str, timestamp: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        self.posts.push(StoredPost {
            id,
            user_id,
            text: text.to_string(),
            timestamp,
        });
        id
    }

    pub fn add_comment(
        &mut self,
        post_id: Uuid,
        user_id: Uuid,
        text: &str,
        timestamp: DateTime<Utc>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.comments.push(StoredComment {
            id,
            post_id,
            user_id,
            text: text.to_string(),
            timestamp,
        });
        id
    }

    /// Seed `count` posts by one author, post `i` created `i` hours in.
    pub fn seed_posts(&mut self, count: usize) -> Vec<Uuid> {
        let author = self.add_user("author");
        (0..count)
            .map(|i| self.add_post(author, &format!("post {i}"), at(i as i64 * 60)))
            .collect()
    }

    pub fn calls(&self) -> CallLog {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, point: FailPoint) -> Result<()> {
        if self.fail_on == Some(point) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn username(&self, user_id: Uuid) -> String {
        self.users.get(&user_id).cloned().unwrap_or_default()
    }

    fn to_row(&self, comment: &StoredComment) -> CommentRow {
        CommentRow {
            id: comment.id,
            post_id: comment.post_id,
            text: comment.text.clone(),
            timestamp: comment.timestamp,
            author: self.username(comment.user_id),
        }
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn count_posts(&self) -> Result<i64> {
        self.calls.lock().unwrap().count_posts += 1;
        self.check(FailPoint::Count)?;
        Ok(self.reported_count.unwrap_or(self.posts.len() as i64))
    }

    async fn list_posts(&self, limit: i64, offset: i64) -> Result<Vec<PostRow>> {
        self.calls.lock().unwrap().list_posts += 1;
        self.check(FailPoint::Posts)?;

        let mut ordered: Vec<&StoredPost> = self.posts.iter().collect();
        ordered.sort_by_key(|p| Reverse((p.timestamp, p.id)));

        Ok(ordered
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|p| PostRow {
                id: p.id,
                text: p.text.clone(),
                timestamp: p.timestamp,
                author: self.username(p.user_id),
                comment_count: self.comments.iter().filter(|c| c.post_id == p.id).count() as i64,
            })
            .collect())
    }

    async fn list_comments(
        &self,
        post_ids: &[Uuid],
        selection: CommentSelection,
        per_post: i64,
    ) -> Result<Vec<CommentRow>> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.list_comments += 1;
            calls.selections.push(selection);
        }
        self.check(FailPoint::Comments)?;

        let mut rows = Vec::new();
        for post_id in post_ids {
            let mut candidates: Vec<&StoredComment> =
                self.comments.iter().filter(|c| c.post_id == *post_id).collect();

            match selection {
                CommentSelection::Recent => {
                    candidates.sort_by_key(|c| Reverse((c.timestamp, c.id)));
                    candidates.truncate(per_post as usize);
                }
                CommentSelection::Random => {
                    // Sample order is deliberately left unsorted.
                    let mut rng = self.rng.lock().unwrap();
                    candidates = candidates
                        .choose_multiple(&mut *rng, per_post as usize)
                        .copied()
                        .collect();
                }
            }

            rows.extend(candidates.into_iter().map(|c| self.to_row(c)));
        }
        Ok(rows)
    }

    async fn health_check(&self) -> Result<()> {
        self.check(FailPoint::Health)
    }
}
