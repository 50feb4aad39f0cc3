use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error type on purpose: a stored hash that cannot be
/// parsed is treated as a mismatch, so only hashing itself can fail.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
