//! postboard-server: posts and comments over HTTP
//!
//! Route handlers map HTTP verbs onto repository calls against a pooled
//! SQLite database. See [`http::run_server`] for the entry point.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbConfig, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
