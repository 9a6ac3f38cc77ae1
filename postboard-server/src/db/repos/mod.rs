//! Repository implementations for database access
//!
//! Each repository borrows the pool for the duration of a call and maps
//! missing rows to [`DbError::NotFound`].

pub mod comments;
pub mod posts;
pub mod users;

pub use comments::{Comment, CommentRepo, NewComment};
pub use posts::{NewPost, Post, PostChanges, PostRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn post_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "post",
            id: id.to_string(),
        }
    }
}
