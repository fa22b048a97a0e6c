//! Blog post repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use ay_group_core::BlogId;

use super::RepositoryError;
use crate::models::blog::{Blog, BlogDraft};

/// Internal row type for blog queries.
#[derive(Debug, sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    content: String,
    excerpt: String,
    author: String,
    category: String,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Self {
            id: BlogId::new(row.id),
            title: row.title,
            content: row.content,
            excerpt: row.excerpt,
            author: row.author,
            category: row.category,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const BLOG_COLUMNS: &str =
    "id, title, content, excerpt, author, category, published, created_at, updated_at";

/// Repository for blog post database operations.
pub struct BlogRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BlogRepository<'a> {
    /// Create a new blog repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all posts, newest first.
    ///
    /// The id tie-break keeps same-instant inserts in creation order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Blog>, RepositoryError> {
        let rows = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List published posts only, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_published(&self) -> Result<Vec<Blog>, RepositoryError> {
        let rows = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE published = 1 ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a post by id, regardless of published state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: BlogId) -> Result<Option<Blog>, RepositoryError> {
        let row =
            sqlx::query_as::<_, BlogRow>(&format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = ?1"))
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Into::into))
    }

    /// Get a post by id only if it is published.
    ///
    /// An unpublished post and a nonexistent id are indistinguishable here,
    /// which is what the public routes rely on.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_published(&self, id: BlogId) -> Result<Option<Blog>, RepositoryError> {
        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = ?1 AND published = 1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a new post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, draft: &BlogDraft, author: &str) -> Result<Blog, RepositoryError> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, BlogRow>(&format!(
            r"
            INSERT INTO blogs (title, content, excerpt, author, category, published, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
            RETURNING {BLOG_COLUMNS}
            "
        ))
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(&draft.excerpt)
        .bind(author)
        .bind(&draft.category)
        .bind(draft.published)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Replace all mutable fields of an existing post.
    ///
    /// Full-replace semantics: every field in the draft overwrites the stored
    /// value. `author` and `created_at` are never touched; `updated_at` is
    /// refreshed. Returns `None` if the id does not resolve.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: BlogId,
        draft: &BlogDraft,
    ) -> Result<Option<Blog>, RepositoryError> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, BlogRow>(&format!(
            r"
            UPDATE blogs
            SET title = ?2, content = ?3, excerpt = ?4, category = ?5, published = ?6, updated_at = ?7
            WHERE id = ?1
            RETURNING {BLOG_COLUMNS}
            "
        ))
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(&draft.excerpt)
        .bind(&draft.category)
        .bind(draft.published)
        .bind(now)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Permanently delete a post.
    ///
    /// Returns `true` if a row was removed, `false` if the id did not resolve.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: BlogId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MIGRATOR;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    async fn test_pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("valid url")
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("connect in-memory database");
        MIGRATOR.run(&pool).await.expect("run migrations");
        pool
    }

    fn draft(title: &str, published: bool) -> BlogDraft {
        BlogDraft {
            title: title.to_string(),
            content: "Some content".to_string(),
            excerpt: String::new(),
            category: String::new(),
            published,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let pool = test_pool().await;
        let repo = BlogRepository::new(&pool);

        let created = repo
            .create(&draft("Launch", true), "AYGroup")
            .await
            .expect("create post");
        assert_eq!(created.title, "Launch");
        assert_eq!(created.author, "AYGroup");
        assert_eq!(created.created_at, created.updated_at);

        let fetched = repo
            .get(created.id)
            .await
            .expect("query post")
            .expect("post exists");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let pool = test_pool().await;
        let repo = BlogRepository::new(&pool);

        let a = repo.create(&draft("A", true), "AYGroup").await.expect("a");
        let b = repo.create(&draft("B", false), "AYGroup").await.expect("b");

        let all = repo.list_all().await.expect("list");
        let ids: Vec<_> = all.iter().map(|blog| blog.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn test_list_published_hides_drafts() {
        let pool = test_pool().await;
        let repo = BlogRepository::new(&pool);

        let published = repo
            .create(&draft("Public", true), "AYGroup")
            .await
            .expect("create");
        let hidden = repo
            .create(&draft("Draft", false), "AYGroup")
            .await
            .expect("create");

        let listed = repo.list_published().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed.first().map(|blog| blog.id), Some(published.id));

        assert!(
            repo.get_published(hidden.id)
                .await
                .expect("query")
                .is_none()
        );
        assert!(repo.get(hidden.id).await.expect("query").is_some());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let pool = test_pool().await;
        let repo = BlogRepository::new(&pool);

        let mut initial = draft("Original", true);
        initial.category = "Tech".to_string();
        initial.excerpt = "An excerpt".to_string();
        let created = repo.create(&initial, "AYGroup").await.expect("create");

        // A draft with defaulted excerpt/category must wipe the old values.
        let updated = repo
            .update(created.id, &draft("Edited", false))
            .await
            .expect("update")
            .expect("post exists");
        assert_eq!(updated.title, "Edited");
        assert_eq!(updated.excerpt, "");
        assert_eq!(updated.category, "");
        assert!(!updated.published);
        assert_eq!(updated.author, "AYGroup");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let pool = test_pool().await;
        let repo = BlogRepository::new(&pool);

        let missing = repo
            .update(BlogId::new(999), &draft("Ghost", true))
            .await
            .expect("update");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let repo = BlogRepository::new(&pool);

        let created = repo
            .create(&draft("Doomed", true), "AYGroup")
            .await
            .expect("create");
        assert!(repo.delete(created.id).await.expect("delete"));
        assert!(repo.get(created.id).await.expect("query").is_none());
        assert!(!repo.delete(created.id).await.expect("second delete"));
    }
}
