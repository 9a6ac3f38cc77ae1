//! User repository
//!
//! No endpoint reads or writes users; the table exists for the schema and
//! these queries back the storage tests of its constraints.

use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// User record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. A duplicate email fails with a unique violation.
    pub async fn create(&self, email: &str, hashed_password: &str) -> Result<User, DbError> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (email, hashed_password)
            VALUES (?, ?)
            RETURNING id, email, hashed_password
            "#,
        )
        .bind(email)
        .bind(hashed_password)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as("SELECT id, email, hashed_password FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }
}
