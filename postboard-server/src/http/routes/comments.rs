//! Comment endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::repos::{Comment, CommentRepo, NewComment};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::timestamp;

/// Create comment request
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    /// Defaults to the time the request is handled; no offset means UTC
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub publication_date: Option<DateTime<Utc>>,
}

/// Comment response
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub publication_date: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            post_id: c.post_id,
            content: c.content,
            publication_date: c.publication_date,
        }
    }
}

/// POST /posts/{id}/comments - attach a comment to a post
#[instrument(skip(state, req))]
async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let comment = CommentRepo::new(&state.pool)
        .create(
            post_id,
            NewComment {
                content: req.content,
                publication_date: req.publication_date.unwrap_or_else(Utc::now),
            },
        )
        .await?;

    tracing::debug!(id = comment.id, "comment created");
    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/posts/{id}/comments", post(create_comment))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{app, call, request, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn create_comment_returns_201() {
        let app = app().await;
        let (_, post) = call(
            &app,
            request(
                Method::POST,
                "/posts",
                Some(json!({ "title": "t", "content": "c" })),
            ),
        )
        .await;
        let id = post["id"].as_i64().unwrap();

        let (status, body) = call(
            &app,
            request(
                Method::POST,
                &format!("/posts/{id}/comments"),
                Some(json!({ "content": "first!", "publication_date": "2024-01-02T03:04:05Z" })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["post_id"], id);
        assert_eq!(body["content"], "first!");
        assert_eq!(body["publication_date"], "2024-01-02T03:04:05Z");

        let (_, fetched) = call(&app, request(Method::GET, &format!("/posts/{id}"), None)).await;
        assert_eq!(fetched["comments"][0]["id"], body["id"]);
    }

    #[tokio::test]
    async fn comment_accepts_date_without_offset() {
        let app = app().await;
        let (_, post) = call(
            &app,
            request(
                Method::POST,
                "/posts",
                Some(json!({ "title": "t", "content": "c" })),
            ),
        )
        .await;
        let id = post["id"].as_i64().unwrap();

        let (status, body) = call(
            &app,
            request(
                Method::POST,
                &format!("/posts/{id}/comments"),
                Some(json!({ "content": "naive", "publication_date": "2024-06-01T10:30:00" })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["publication_date"], "2024-06-01T10:30:00Z");
    }

    #[tokio::test]
    async fn comment_on_missing_post_is_404() {
        let (status, body) = send(request(
            Method::POST,
            "/posts/9/comments",
            Some(json!({ "content": "hello?" })),
        ))
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "post '9' not found");
    }
}
