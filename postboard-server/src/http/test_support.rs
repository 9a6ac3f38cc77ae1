//! Helpers for driving the router in tests

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use super::server::{build_router, AppState};
use crate::db::{create_memory_pool, migrations};

/// Router over a fresh in-memory database.
pub async fn app() -> Router {
    app_with_pool().await.0
}

/// Router plus a handle on its pool, for asserting on stored rows.
pub async fn app_with_pool() -> (Router, SqlitePool) {
    let pool = create_memory_pool().await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    (build_router(AppState { pool: pool.clone() }), pool)
}

/// Build a request, with a JSON body when given.
pub fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request to a fresh app.
pub async fn send(req: Request<Body>) -> (StatusCode, Value) {
    call(&app().await, req).await
}

/// Send a request to an existing app, returning status and parsed body.
///
/// Empty bodies come back as `Value::Null`.
pub async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}
