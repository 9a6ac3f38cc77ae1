//! Subcommand implementations

pub mod migrate;
pub mod serve;

use postboard_server::db::pool::DEFAULT_DATABASE_URL;

/// Resolve the database URL: flag or `DATABASE_URL`, then the default file.
pub fn resolve_database_url(flag: Option<String>) -> String {
    flag.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}
