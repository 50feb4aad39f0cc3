use thiserror::Error;

use auth::JwtError;
use auth::PasswordError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Write-path storage fault.
///
/// Writes are fail-closed: this error propagates to the caller as an
/// internal-error signal. Reads never produce it; the store absorbs
/// read faults into "not found".
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for the authentication flows.
///
/// `InvalidCredentials` deliberately covers both "no such account" and
/// "wrong password" so the outward message cannot be used for user
/// enumeration.
#[derive(Debug, Error)]
pub enum AuthError {
    // User-correctable input problems, reported verbatim
    #[error("{0}")]
    Validation(String),

    #[error("Email already exists")]
    EmailExists,

    // Generic outward signals, never revealing which check failed
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authorization token required")]
    TokenRequired,

    #[error("Invalid or expired token")]
    InvalidToken,

    // Internal faults, surfaced as internal errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
