//! Post repository
//!
//! Handles post CRUD:
//! - partial update in a single `UPDATE ... RETURNING`
//! - delete relies on `ON DELETE CASCADE` for comments

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::Pagination;

/// Post record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub publication_date: DateTime<Utc>,
}

/// Fields for inserting a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub publication_date: DateTime<Utc>,
}

/// Fields for a partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a post and return the stored record.
    pub async fn create(&self, post: NewPost) -> Result<Post, DbError> {
        let post: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (title, content, publication_date)
            VALUES (?, ?, ?)
            RETURNING id, title, content, publication_date
            "#,
        )
        .bind(post.title)
        .bind(post.content)
        .bind(post.publication_date)
        .fetch_one(self.pool)
        .await?;

        Ok(post)
    }

    /// List posts in id order within the pagination window.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Post>, DbError> {
        let posts: Vec<Post> = sqlx::query_as(
            r#"
            SELECT id, title, content, publication_date
            FROM posts
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a single post by ID.
    pub async fn get(&self, id: i64) -> Result<Post, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, title, content, publication_date
            FROM posts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::post_not_found(id))
    }

    /// Apply a partial update.
    ///
    /// Columns whose change is `None` keep their stored value.
    pub async fn update(&self, id: i64, changes: PostChanges) -> Result<Post, DbError> {
        if changes.is_empty() {
            return self.get(id).await;
        }

        sqlx::query_as(
            r#"
            UPDATE posts
            SET title = COALESCE(?, title),
                content = COALESCE(?, content)
            WHERE id = ?
            RETURNING id, title, content, publication_date
            "#,
        )
        .bind(changes.title)
        .bind(changes.content)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::post_not_found(id))
    }

    /// Delete a post together with its comments.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::post_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};
    use chrono::TimeZone;

    async fn pool() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        pool
    }

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: format!("{title} body"),
            publication_date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let pool = pool().await;
        let repo = PostRepo::new(&pool);

        let created = repo.create(new_post("hello")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.title, "hello");
        assert_eq!(fetched.content, "hello body");
        assert_eq!(
            fetched.publication_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = pool().await;

        let err = PostRepo::new(&pool).get(99).await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { resource: "post", ref id } if id == "99"));
    }

    #[tokio::test]
    async fn list_respects_window() {
        let pool = pool().await;
        let repo = PostRepo::new(&pool);
        for i in 0..5 {
            repo.create(new_post(&format!("post {i}"))).await.unwrap();
        }

        let page = repo.list(Pagination::new(1, 2)).await.unwrap();

        let titles: Vec<_> = page.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["post 1", "post 2"]);
    }

    #[tokio::test]
    async fn list_past_end_is_empty() {
        let pool = pool().await;
        let repo = PostRepo::new(&pool);
        repo.create(new_post("only")).await.unwrap();

        assert!(repo.list(Pagination::new(5, 10)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_touches_only_given_fields() {
        let pool = pool().await;
        let repo = PostRepo::new(&pool);
        let post = repo.create(new_post("before")).await.unwrap();

        let updated = repo
            .update(
                post.id,
                PostChanges {
                    title: Some("after".into()),
                    content: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "after");
        assert_eq!(updated.content, "before body");
        assert_eq!(updated.publication_date, post.publication_date);
    }

    #[tokio::test]
    async fn empty_update_returns_post_unchanged() {
        let pool = pool().await;
        let repo = PostRepo::new(&pool);
        let post = repo.create(new_post("same")).await.unwrap();

        let updated = repo.update(post.id, PostChanges::default()).await.unwrap();

        assert_eq!(updated, post);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = pool().await;
        let changes = PostChanges {
            title: Some("x".into()),
            content: None,
        };

        let err = PostRepo::new(&pool).update(7, changes).await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_post() {
        let pool = pool().await;
        let repo = PostRepo::new(&pool);
        let post = repo.create(new_post("gone")).await.unwrap();

        repo.delete(post.id).await.unwrap();

        assert!(matches!(repo.get(post.id).await, Err(DbError::NotFound { .. })));
        assert!(matches!(repo.delete(post.id).await, Err(DbError::NotFound { .. })));
    }
}
