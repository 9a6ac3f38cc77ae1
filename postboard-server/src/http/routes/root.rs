//! Root greeting

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct Greeting {
    pub hello: &'static str,
}

/// GET /
async fn hello() -> Json<Greeting> {
    Json(Greeting { hello: "world" })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(hello))
}
