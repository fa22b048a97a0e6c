//! Admin blog CRUD route handlers.
//!
//! All handlers here require an admin session via [`RequireAdmin`].

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use serde::Deserialize;

use ay_group_core::BlogId;

use crate::db::BlogRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::{Blog, BlogDraft};
use crate::routes::auth::MessageResponse;
use crate::state::AppState;

/// Create/update request body.
///
/// Optional fields default rather than erroring; title/content are checked
/// for presence in [`BlogPayload::validate`].
#[derive(Debug, Deserialize)]
pub struct BlogPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
}

impl BlogPayload {
    /// Validate the payload into a full draft.
    ///
    /// Missing or empty title/content is a 400. Omitted optional fields
    /// take their defaults; on update this is what makes the operation a
    /// full replace.
    fn validate(self) -> Result<BlogDraft> {
        let (Some(title), Some(content)) = (
            self.title.filter(|t| !t.is_empty()),
            self.content.filter(|c| !c.is_empty()),
        ) else {
            return Err(AppError::BadRequest(
                "Title and content are required".to_string(),
            ));
        };

        Ok(BlogDraft {
            title,
            content,
            excerpt: self.excerpt.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            published: self.published.unwrap_or(true),
        })
    }
}

/// List all posts, drafts included, newest first.
///
/// GET /admin/blogs
///
/// # Errors
///
/// Returns 401 without a valid session.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<Blog>>> {
    let blogs = BlogRepository::new(state.pool()).list_all().await?;
    Ok(Json(blogs))
}

/// Get one post regardless of published state.
///
/// GET /admin/blogs/{id}
///
/// # Errors
///
/// Returns 401 without a valid session, 404 if the id does not resolve.
pub async fn get(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Json<Blog>> {
    let blog = BlogRepository::new(state.pool())
        .get(BlogId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(blog))
}

/// Create a post.
///
/// POST /admin/blogs
///
/// The author is the acting admin's display name, snapshotted onto the
/// record.
///
/// # Errors
///
/// Returns 401 without a valid session, 400 on missing title/content.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(payload): Json<BlogPayload>,
) -> Result<(StatusCode, Json<Blog>)> {
    let draft = payload.validate()?;

    let author = if admin.name.is_empty() {
        state.config().default_admin.name.clone()
    } else {
        admin.name
    };

    let blog = BlogRepository::new(state.pool())
        .create(&draft, &author)
        .await?;

    tracing::info!(blog_id = %blog.id, "Blog post created");

    Ok((StatusCode::CREATED, Json(blog)))
}

/// Full-replace update of a post.
///
/// PUT /admin/blogs/{id}
///
/// Every mutable field is overwritten from the payload; omitted optionals
/// reset to their defaults, never preserved. Author and creation time are
/// untouched.
///
/// # Errors
///
/// Returns 401 without a valid session, 400 on missing title/content,
/// 404 if the id does not resolve.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
    Json(payload): Json<BlogPayload>,
) -> Result<Json<Blog>> {
    let draft = payload.validate()?;

    let blog = BlogRepository::new(state.pool())
        .update(BlogId::new(id), &draft)
        .await?
        .ok_or(AppError::NotFound)?;

    tracing::info!(blog_id = %blog.id, "Blog post updated");

    Ok(Json(blog))
}

/// Permanently delete a post.
///
/// DELETE /admin/blogs/{id}
///
/// # Errors
///
/// Returns 401 without a valid session, 404 if the id does not resolve.
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    let deleted = BlogRepository::new(state.pool())
        .delete(BlogId::new(id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    tracing::info!(blog_id = id, "Blog post deleted");

    Ok(Json(MessageResponse {
        message: "Blog deleted successfully".to_string(),
    }))
}
