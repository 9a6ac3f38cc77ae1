//! Comment repository
//!
//! Comments are only ever created under an existing post and read back
//! grouped by post.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

use super::DbError;

/// Comment record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub publication_date: DateTime<Utc>,
}

/// Fields for inserting a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub publication_date: DateTime<Utc>,
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Attach a comment to a post.
    ///
    /// The insert selects from `posts`, so a missing post inserts nothing
    /// and surfaces as `NotFound` instead of a foreign key failure.
    pub async fn create(&self, post_id: i64, comment: NewComment) -> Result<Comment, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO comments (post_id, content, publication_date)
            SELECT id, ?, ? FROM posts WHERE id = ?
            RETURNING id, post_id, content, publication_date
            "#,
        )
        .bind(comment.content)
        .bind(comment.publication_date)
        .bind(post_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::post_not_found(post_id))
    }

    /// Comments of one post, oldest first.
    pub async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, DbError> {
        let comments: Vec<Comment> = sqlx::query_as(
            r#"
            SELECT id, post_id, content, publication_date
            FROM comments
            WHERE post_id = ?
            ORDER BY id
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Comments of several posts in one query, ordered by id.
    pub async fn list_for_posts(&self, post_ids: &[i64]) -> Result<Vec<Comment>, DbError> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, post_id, content, publication_date FROM comments WHERE post_id IN (",
        );
        let mut ids = query.separated(", ");
        for id in post_ids {
            ids.push_bind(*id);
        }
        ids.push_unseparated(") ORDER BY id");

        let comments = query
            .build_query_as::<Comment>()
            .fetch_all(self.pool)
            .await?;

        Ok(comments)
    }
}
