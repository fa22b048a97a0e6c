//! Integration tests for the AY Group blog backend.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ay-group-integration-tests
//! ```
//!
//! Each test spawns the real application in-process on an ephemeral port
//! with its own throwaway `SQLite` database, then drives it over HTTP with
//! a cookie-store client - the same path a browser takes.
//!
//! # Test Categories
//!
//! - `admin_auth` - Login, logout, and session guarding
//! - `admin_blogs` - Blog CRUD through the admin API
//! - `public_blogs` - Published-only visibility on the public feed

use std::sync::atomic::{AtomicU32, Ordering};

use reqwest::Client;
use secrecy::SecretString;

use ay_group_server::config::{DefaultAdminConfig, ServerConfig};
use ay_group_server::services::AuthService;
use ay_group_server::state::AppState;
use ay_group_server::{build_app, db, middleware};

/// Bootstrap admin email used by every test server.
pub const ADMIN_EMAIL: &str = "admin@ay-group.net";
/// Bootstrap admin password used by every test server.
pub const ADMIN_PASSWORD: &str = "AYGroup@2025";
/// Bootstrap admin display name used by every test server.
pub const ADMIN_NAME: &str = "AYGroup";

static DB_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A running test server plus a cookie-holding client.
pub struct TestContext {
    /// HTTP client with a cookie store, so sessions behave as in a browser.
    pub client: Client,
    /// Base URL of the spawned server, e.g. `http://127.0.0.1:41234`.
    pub base_url: String,
    db_path: std::path::PathBuf,
}

impl TestContext {
    /// Spawn the application on an ephemeral port with a fresh database.
    ///
    /// # Panics
    ///
    /// Panics if any part of the startup sequence fails; tests cannot
    /// meaningfully continue without a server.
    pub async fn spawn() -> Self {
        let db_path = std::env::temp_dir().join(format!(
            "ay-blog-test-{}-{}.db",
            std::process::id(),
            DB_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        let config = ServerConfig {
            database_url: SecretString::from(format!("sqlite:{}", db_path.display())),
            host: "127.0.0.1".parse().expect("valid ip"),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            default_admin: DefaultAdminConfig {
                email: ADMIN_EMAIL.parse().expect("valid email"),
                password: SecretString::from(ADMIN_PASSWORD),
                name: ADMIN_NAME.to_string(),
            },
        };

        let pool = db::create_pool(&config.database_url)
            .await
            .expect("create database pool");
        db::MIGRATOR.run(&pool).await.expect("run migrations");

        AuthService::new(&pool)
            .ensure_default_admin(&config.default_admin)
            .await
            .expect("bootstrap default admin");

        let session_layer = middleware::create_session_layer(&pool, &config)
            .await
            .expect("create session layer");

        let state = AppState::new(config, pool);
        let app = build_app(state, session_layer);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("build http client");

        Self {
            client,
            base_url: format!("http://{addr}"),
            db_path,
        }
    }

    /// Build a full URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Log in as the bootstrap admin; the session cookie lands in `client`.
    ///
    /// # Panics
    ///
    /// Panics if the login request fails or is rejected.
    pub async fn login(&self) {
        let response = self
            .client
            .post(self.url("/admin/login"))
            .json(&serde_json::json!({
                "email": ADMIN_EMAIL,
                "password": ADMIN_PASSWORD,
            }))
            .send()
            .await
            .expect("send login request");
        assert!(
            response.status().is_success(),
            "login failed: {}",
            response.status()
        );
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Best-effort cleanup of the throwaway database and its WAL siblings
        for suffix in ["", "-wal", "-shm"] {
            let mut path = self.db_path.clone().into_os_string();
            path.push(suffix);
            let _ = std::fs::remove_file(path);
        }
    }
}
