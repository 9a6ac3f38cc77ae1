//! Schema creation command

use anyhow::{Context, Result};
use clap::Parser;

use postboard_server::db::migrations;
use postboard_server::DbConfig;

use super::resolve_database_url;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (default: sqlite://postboard.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create all tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let db = DbConfig {
        database_url: resolve_database_url(args.database_url),
        ..DbConfig::default()
    };

    let pool = db
        .connect()
        .await
        .with_context(|| format!("Failed to open database {}", db.database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to create schema")?;
    pool.close().await;

    println!("Schema ready at {}", db.database_url);
    Ok(())
}
