//! Blog post domain model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ay_group_core::BlogId;

/// A blog post.
///
/// Serializes to the public representation: every field here is safe to
/// return to any caller.
#[derive(Debug, Clone, Serialize)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating or fully replacing a post.
///
/// Produced by the route layer after the title/content presence check;
/// optional fields have already been defaulted. On update, every field
/// overwrites the stored value - omitted input resets to the default
/// rather than preserving the prior value.
#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub published: bool,
}
