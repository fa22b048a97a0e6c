//! Admin repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use ay_group_core::{AdminId, Email};

use super::RepositoryError;
use crate::models::admin::Admin;

/// Internal row type for admin queries.
///
/// The password hash is queried separately via [`AdminRepository::get_auth_by_email`]
/// and never travels with the domain model.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: i64,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AdminId::new(row.id),
            email,
            name: row.name,
            created_at: row.created_at,
        })
    }
}

/// Repository for admin database operations.
pub struct AdminRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an admin by their email address (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            SELECT id, email, name, created_at
            FROM admins
            WHERE email = ?1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get an admin together with their stored password hash.
    ///
    /// Used only by the login path; the hash must not leave the auth service.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_auth_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<(Admin, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, (i64, String, String, String, DateTime<Utc>)>(
            r"
            SELECT id, email, password_hash, name, created_at
            FROM admins
            WHERE email = ?1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some((id, email, password_hash, name, created_at)) => {
                let email = Email::parse(&email).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
                })?;

                Ok(Some((
                    Admin {
                        id: AdminId::new(id),
                        email,
                        name,
                        created_at,
                    },
                    password_hash,
                )))
            }
            None => Ok(None),
        }
    }

    /// Create a new admin.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        password_hash: &str,
        name: &str,
    ) -> Result<Admin, RepositoryError> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, AdminRow>(
            r"
            INSERT INTO admins (email, password_hash, name, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, email, name, created_at
            ",
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(now)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
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

    #[tokio::test]
    async fn test_create_and_get_by_email() {
        let pool = test_pool().await;
        let repo = AdminRepository::new(&pool);
        let email = Email::parse("admin@ay-group.net").expect("valid email");

        let created = repo
            .create(&email, "$argon2id$fake", "AYGroup")
            .await
            .expect("create admin");
        assert_eq!(created.email, email);
        assert_eq!(created.name, "AYGroup");

        let fetched = repo
            .get_by_email(&email)
            .await
            .expect("query admin")
            .expect("admin exists");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let pool = test_pool().await;
        let repo = AdminRepository::new(&pool);
        let email = Email::parse("admin@ay-group.net").expect("valid email");

        repo.create(&email, "hash", "AYGroup")
            .await
            .expect("create admin");
        let err = repo
            .create(&email, "hash", "AYGroup")
            .await
            .expect_err("duplicate must fail");
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_get_auth_returns_hash() {
        let pool = test_pool().await;
        let repo = AdminRepository::new(&pool);
        let email = Email::parse("admin@ay-group.net").expect("valid email");

        repo.create(&email, "stored-hash", "AYGroup")
            .await
            .expect("create admin");
        let (admin, hash) = repo
            .get_auth_by_email(&email)
            .await
            .expect("query admin")
            .expect("admin exists");
        assert_eq!(admin.email, email);
        assert_eq!(hash, "stored-hash");
    }

    #[tokio::test]
    async fn test_unknown_email_is_none() {
        let pool = test_pool().await;
        let repo = AdminRepository::new(&pool);
        let email = Email::parse("nobody@ay-group.net").expect("valid email");

        assert!(repo.get_by_email(&email).await.expect("query").is_none());
        assert!(
            repo.get_auth_by_email(&email)
                .await
                .expect("query")
                .is_none()
        );
    }
}
