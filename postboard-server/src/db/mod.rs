//! Database layer - connection pool, schema and repositories
//!
//! - Connection pool shared by all requests; each repository call checks a
//!   connection out and returns it when the call completes
//! - List operations load comments in one extra query, never one per post
//! - Rely on DB constraints (foreign keys, cascade, unique email)

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options, DbConfig};
pub use repos::*;
