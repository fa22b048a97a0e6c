//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (unknown email or wrong password).
    ///
    /// The two causes are deliberately indistinguishable so login responses
    /// cannot be used to enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Invalid email format (admin creation only).
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] ay_group_core::EmailError),

    /// Admin already exists.
    #[error("admin already exists")]
    AdminAlreadyExists,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
