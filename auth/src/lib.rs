//! Authentication infrastructure library
//!
//! Provides the reusable building blocks the identity service composes:
//! - Password hashing (Argon2id)
//! - Signed session tokens (JWT, HS256) with a fixed expiry horizon
//! - Authentication coordination (verify credentials, then mint a token)
//!
//! The signing secret is always supplied by the caller, never generated
//! here: a per-process random key would invalidate every outstanding token
//! on restart, so key material is configuration, not library state.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, TokenService};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("user123", "alice", "alice@example.com", "USER", Duration::hours(24));
//! let token = tokens.issue(&claims).unwrap();
//! assert!(tokens.validate(&token));
//! assert_eq!(tokens.subject_of(&token).unwrap(), "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_subject("user123", "alice", "alice@example.com", "USER", Duration::hours(24));
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//! assert!(auth.token_service().validate(&result.access_token));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
