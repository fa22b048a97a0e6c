//! AY Group blog server - public feed + admin panel backend.
//!
//! This binary serves the JSON blog API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - `SQLite` for posts, admins, and session storage
//! - Cookie-referenced server-side sessions (tower-sessions)
//! - Static page shells for the admin panel; all logic lives in the JSON API

#![cfg_attr(not(test), forbid(unsafe_code))]

use ay_group_server::config::ServerConfig;
use ay_group_server::services::AuthService;
use ay_group_server::state::AppState;
use ay_group_server::{build_app, db, middleware};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ay_group_server=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // Run migrations (also available explicitly via: cargo run -p ay-group-cli -- migrate)
    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    // Ensure the default admin exists (idempotent)
    AuthService::new(&pool)
        .ensure_default_admin(&config.default_admin)
        .await
        .expect("Failed to bootstrap default admin");

    // Create session layer (creates the session table if missing)
    let session_layer = middleware::create_session_layer(&pool, &config)
        .await
        .expect("Failed to initialize session store");

    // Build application state and router
    let state = AppState::new(config.clone(), pool);
    let app = build_app(state, session_layer);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("blog server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
