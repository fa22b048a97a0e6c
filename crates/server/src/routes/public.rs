//! Public blog route handlers.
//!
//! No authentication: only published posts are visible. An unpublished post
//! and a nonexistent id both answer 404 so a draft's existence never leaks.

use axum::{
    Json,
    extract::{Path, State},
};

use ay_group_core::BlogId;

use crate::db::BlogRepository;
use crate::error::{AppError, Result};
use crate::models::Blog;
use crate::state::AppState;

/// List published posts, newest first.
///
/// GET /blogs
///
/// # Errors
///
/// Returns 500 if the database query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Blog>>> {
    let blogs = BlogRepository::new(state.pool()).list_published().await?;
    Ok(Json(blogs))
}

/// Get one published post.
///
/// GET /blogs/{id}
///
/// # Errors
///
/// Returns 404 if the id does not resolve to a published post.
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Blog>> {
    let blog = BlogRepository::new(state.pool())
        .get_published(BlogId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(blog))
}
