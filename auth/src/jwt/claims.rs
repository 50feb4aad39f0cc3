use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// The subject is the persisted user id; username, email, and role ride
/// along so callers can make authorization decisions without a store
/// round trip. Tokens are bearer artifacts: minted, transmitted,
/// validated, never stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Username at issuance time
    pub username: String,

    /// Email at issuance time
    pub email: String,

    /// Role string ("USER" or "ADMIN")
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject with automatic expiration.
    ///
    /// # Arguments
    /// * `sub` - Unique user identifier
    /// * `username` - Username to embed
    /// * `email` - Email to embed
    /// * `role` - Role string to embed
    /// * `ttl` - Time until the token expires
    ///
    /// # Returns
    /// Claims with `iat` set to now and `exp` set to now + ttl
    pub fn for_subject(
        sub: impl ToString,
        username: &str,
        email: &str,
        role: &str,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: sub.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the claims are expired at the given instant.
    ///
    /// The comparison is strict: a token expiring exactly at `now` is
    /// already expired.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}
