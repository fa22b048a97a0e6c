//! Admin management commands.
//!
//! # Usage
//!
//! ```bash
//! # Ensure the configured default admin exists
//! ay-cli admin bootstrap
//!
//! # Create a new admin directly
//! ay-cli admin create -e editor@ay-group.net -n "Editor" -p "a-password"
//! ```
//!
//! # Environment Variables
//!
//! - `BLOG_DATABASE_URL` - `SQLite` connection string
//! - `BLOG_ADMIN_EMAIL` / `BLOG_ADMIN_PASSWORD` / `BLOG_ADMIN_NAME` -
//!   bootstrap identity (see the server config for defaults)

use ay_group_server::config::ServerConfig;
use ay_group_server::db;
use ay_group_server::services::{AuthError, AuthService};
use thiserror::Error;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ay_group_server::config::ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Authentication service error.
    #[error("{0}")]
    Auth(#[from] AuthError),
}

/// Ensure the configured default admin exists.
///
/// Safe to run repeatedly; a second run is a no-op.
///
/// # Errors
///
/// Returns `AdminError` if the database cannot be reached or hashing fails.
pub async fn bootstrap() -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to blog database...");
    let pool = db::create_pool(&config.database_url).await?;
    db::MIGRATOR.run(&pool).await?;

    AuthService::new(&pool)
        .ensure_default_admin(&config.default_admin)
        .await?;

    tracing::info!("Default admin ensured: {}", config.default_admin.email);
    Ok(())
}

/// Create a new admin.
///
/// # Errors
///
/// Returns `AdminError::Auth` if the email is invalid or already taken.
pub async fn create(email: &str, name: &str, password: &str) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to blog database...");
    let pool = db::create_pool(&config.database_url).await?;
    db::MIGRATOR.run(&pool).await?;

    tracing::info!("Creating admin: {}", email);
    let admin = AuthService::new(&pool).create_admin(email, password, name).await?;

    tracing::info!(
        "Admin created successfully! ID: {}, Email: {}",
        admin.id,
        admin.email
    );
    Ok(())
}
