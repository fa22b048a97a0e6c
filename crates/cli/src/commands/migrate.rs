//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! ay-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `BLOG_DATABASE_URL` - `SQLite` connection string (default: `sqlite:data/blog.db`)

use ay_group_server::config::ServerConfig;
use ay_group_server::db;
use thiserror::Error;

/// Errors that can occur during migration.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ay_group_server::config::ConfigError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run the blog database migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database cannot be reached or a
/// migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to blog database...");
    let pool = db::create_pool(&config.database_url).await?;

    tracing::info!("Running migrations...");
    db::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
