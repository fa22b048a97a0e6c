//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (database ping)
//!
//! # Admin panel
//! GET    /admin             - Login page (static shell)
//! POST   /admin/login       - Login; body {email, password}
//! POST   /admin/logout      - Logout (requires session)
//! GET    /admin/dashboard   - Management page (requires session, static shell)
//!
//! # Admin blog API (requires session)
//! GET    /admin/blogs       - List all posts (drafts included)
//! GET    /admin/blogs/{id}  - Get one post (any state)
//! POST   /admin/blogs       - Create post; body {title, content, excerpt?, category?, published?}
//! PUT    /admin/blogs/{id}  - Full-replace update; same body shape
//! DELETE /admin/blogs/{id}  - Delete post
//!
//! # Public blog API
//! GET  /blogs               - List published posts
//! GET  /blogs/{id}          - Get one published post
//! ```

pub mod auth;
pub mod blogs;
pub mod public;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the full application route set.
pub fn routes() -> Router<AppState> {
    Router::new().merge(admin_routes()).merge(public_routes())
}

/// Create the admin routes router (login, pages, and the guarded blog CRUD).
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(auth::login_page))
        .route("/admin/login", post(auth::login))
        .route("/admin/logout", post(auth::logout))
        .route("/admin/dashboard", get(auth::dashboard))
        .route("/admin/blogs", get(blogs::list).post(blogs::create))
        .route(
            "/admin/blogs/{id}",
            get(blogs::get).put(blogs::update).delete(blogs::remove),
        )
}

/// Create the public routes router (published posts only).
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(public::list))
        .route("/blogs/{id}", get(public::get))
}
