//! Post endpoints

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::comments::CommentResponse;
use crate::db::repos::{Comment, CommentRepo, NewPost, Post, PostChanges, PostRepo};
use crate::http::error::ApiError;
use crate::http::extractors::Window;
use crate::http::server::AppState;
use crate::models::timestamp;

/// Create post request
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    /// Defaults to the time the request is handled; no offset means UTC
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub publication_date: Option<DateTime<Utc>>,
}

/// Partial update request. Absent and `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Post response, always carrying its comments
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub publication_date: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
}

impl PostResponse {
    fn new(post: Post, comments: Vec<Comment>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            publication_date: post.publication_date,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

/// Pair each post with its comments, keeping post order.
fn attach_comments(posts: Vec<Post>, comments: Vec<Comment>) -> Vec<PostResponse> {
    let mut by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
    for comment in comments {
        by_post.entry(comment.post_id).or_default().push(comment);
    }

    posts
        .into_iter()
        .map(|post| {
            let comments = by_post.remove(&post.id).unwrap_or_default();
            PostResponse::new(post, comments)
        })
        .collect()
}

/// POST /posts - create a post
#[instrument(skip(state, req), fields(title = %req.title))]
async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let post = PostRepo::new(&state.pool)
        .create(NewPost {
            title: req.title,
            content: req.content,
            publication_date: req.publication_date.unwrap_or_else(Utc::now),
        })
        .await?;

    tracing::debug!(id = post.id, "post created");
    Ok((StatusCode::CREATED, Json(PostResponse::new(post, Vec::new()))))
}

/// GET /posts - list posts within the skip/limit window
async fn list_posts(
    State(state): State<Arc<AppState>>,
    Window(page): Window,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = PostRepo::new(&state.pool).list(page).await?;
    let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    let comments = CommentRepo::new(&state.pool).list_for_posts(&ids).await?;

    Ok(Json(attach_comments(posts, comments)))
}

/// GET /posts/{id} - get a single post with its comments
async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = PostRepo::new(&state.pool).get(id).await?;
    let comments = CommentRepo::new(&state.pool).list_for_post(id).await?;

    Ok(Json(PostResponse::new(post, comments)))
}

/// PATCH /posts/{id} - update the fields present in the payload
#[instrument(skip(state, req))]
async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let changes = PostChanges {
        title: req.title,
        content: req.content,
    };
    let post = PostRepo::new(&state.pool).update(id, changes).await?;
    let comments = CommentRepo::new(&state.pool).list_for_post(id).await?;

    Ok(Json(PostResponse::new(post, comments)))
}

/// DELETE /posts/{id} - delete a post and its comments
#[instrument(skip(state))]
async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    PostRepo::new(&state.pool).delete(id).await?;
    tracing::debug!("post deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(update_post).delete(delete_post),
        )
}
