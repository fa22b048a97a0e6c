//! Authentication service.
//!
//! Password login, password hashing, and the idempotent admin bootstrapper.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;
use sqlx::SqlitePool;

use ay_group_core::Email;

use crate::config::DefaultAdminConfig;
use crate::db::{AdminRepository, RepositoryError};
use crate::models::Admin;

/// A syntactically valid Argon2id hash with no known preimage.
///
/// Login verifies against this when the email does not resolve, so the
/// unknown-email and wrong-password paths do comparable work and stay
/// indistinguishable to the caller.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Authentication service.
///
/// Handles admin login and bootstrap.
pub struct AuthService<'a> {
    admins: AdminRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            admins: AdminRepository::new(pool),
        }
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong;
    /// unknown email and wrong password are not distinguished.
    pub async fn login(&self, email: &str, password: &str) -> Result<Admin, AuthError> {
        let Ok(email) = Email::parse(email) else {
            // Unparseable input cannot match a stored admin; burn the same
            // verification work before answering.
            let _ = verify_password(password, DUMMY_HASH);
            return Err(AuthError::InvalidCredentials);
        };

        match self.admins.get_auth_by_email(&email).await? {
            Some((admin, password_hash)) => {
                verify_password(password, &password_hash)?;
                Ok(admin)
            }
            None => {
                let _ = verify_password(password, DUMMY_HASH);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Ensure the configured default admin exists.
    ///
    /// Checks for an admin with the configured email; creates one with the
    /// hashed configured password if absent. Safe to call repeatedly: the
    /// existence check makes it a no-op once the row exists, and a unique
    /// violation after a lost bootstrap race also counts as success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if a database operation fails, or
    /// `AuthError::PasswordHash` if hashing fails.
    pub async fn ensure_default_admin(
        &self,
        default_admin: &DefaultAdminConfig,
    ) -> Result<(), AuthError> {
        if self.admins.get_by_email(&default_admin.email).await?.is_some() {
            return Ok(());
        }

        let password_hash = hash_password(default_admin.password.expose_secret())?;

        match self
            .admins
            .create(&default_admin.email, &password_hash, &default_admin.name)
            .await
        {
            Ok(admin) => {
                tracing::info!(email = %admin.email, "Default admin created");
                Ok(())
            }
            Err(RepositoryError::Conflict(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Create a new admin with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::AdminAlreadyExists` if the email is already taken.
    pub async fn create_admin(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Admin, AuthError> {
        let email = Email::parse(email)?;
        let password_hash = hash_password(password)?;

        self.admins
            .create(&email, &password_hash, name)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::AdminAlreadyExists,
                other => AuthError::Repository(other),
            })
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
