//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults give a working local setup.
//!
//! - `BLOG_DATABASE_URL` - `SQLite` connection string (default: `sqlite:data/blog.db`;
//!   falls back to generic `DATABASE_URL` if set)
//! - `BLOG_HOST` - Bind address (default: 127.0.0.1)
//! - `BLOG_PORT` - Listen port (default: 3000)
//! - `BLOG_BASE_URL` - Public base URL, controls the Secure cookie flag
//!   (default: `http://localhost:3000`)
//! - `BLOG_ADMIN_EMAIL` - Bootstrap admin email (default: `admin@ay-group.net`)
//! - `BLOG_ADMIN_PASSWORD` - Bootstrap admin password (default: `AYGroup@2025`)
//! - `BLOG_ADMIN_NAME` - Bootstrap admin display name (default: `AYGroup`)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

use ay_group_core::{Email, EmailError};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `SQLite` database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the server
    pub base_url: String,
    /// Bootstrap admin identity
    pub default_admin: DefaultAdminConfig,
}

/// Bootstrap admin identity ensured at startup.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DefaultAdminConfig {
    /// Admin email address
    pub email: Email,
    /// Admin password (hashed before storage, never persisted as-is)
    pub password: SecretString,
    /// Admin display name
    pub name: String,
}

impl std::fmt::Debug for DefaultAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultAdminConfig")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("BLOG_DATABASE_URL", "sqlite:data/blog.db");
        let host = get_env_or_default("BLOG_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BLOG_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BLOG_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BLOG_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("BLOG_BASE_URL", "http://localhost:3000");
        let default_admin = DefaultAdminConfig::from_env()?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            default_admin,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the public base URL is served over HTTPS.
    ///
    /// Controls the Secure flag on the session cookie.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl DefaultAdminConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let email = Email::parse(&get_env_or_default("BLOG_ADMIN_EMAIL", "admin@ay-group.net"))
            .map_err(|e: EmailError| {
                ConfigError::InvalidEnvVar("BLOG_ADMIN_EMAIL".to_string(), e.to_string())
            })?;
        let password = SecretString::from(get_env_or_default("BLOG_ADMIN_PASSWORD", "AYGroup@2025"));
        let name = get_env_or_default("BLOG_ADMIN_NAME", "AYGroup");

        Ok(Self {
            email,
            password,
            name,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`, then a default.
fn get_database_url(primary_key: &str, default: &str) -> SecretString {
    if let Ok(value) = std::env::var(primary_key) {
        return SecretString::from(value);
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return SecretString::from(value);
    }
    SecretString::from(default)
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_admin_debug_redacts_password() {
        let admin = DefaultAdminConfig {
            email: Email::parse("admin@ay-group.net").expect("valid email"),
            password: SecretString::from("AYGroup@2025"),
            name: "AYGroup".to_string(),
        };
        let debug = format!("{admin:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("AYGroup@2025"));
    }

    #[test]
    fn test_is_secure() {
        let config = ServerConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().expect("valid ip"),
            port: 3000,
            base_url: "https://blog.ay-group.net".to_string(),
            default_admin: DefaultAdminConfig {
                email: Email::parse("admin@ay-group.net").expect("valid email"),
                password: SecretString::from("pw"),
                name: "AYGroup".to_string(),
            },
        };
        assert!(config.is_secure());
    }
}
