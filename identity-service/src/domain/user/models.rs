use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::user::errors::UserIdError;

/// User aggregate entity.
///
/// Owned by the store: `id` is `None` until the first successful `save`
/// assigns the surrogate identifier, and never changes afterwards.
/// Username and email are intended unique, but only advisorily so
/// (check-then-insert, no storage constraint).
#[derive(Debug, Clone)]
pub struct User {
    pub id: Option<UserId>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a not-yet-persisted user with the default USER role.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            username,
            email,
            password_hash,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a not-yet-persisted user with an explicit role.
    pub fn with_role(username: String, email: String, password_hash: String, role: Role) -> Self {
        Self {
            role,
            ..Self::new(username, email, password_hash)
        }
    }

    /// Replace the credential hash, advancing `updated_at`.
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// User unique identifier type.
///
/// Surrogate id assigned by the store on first insert; distinct from the
/// natural keys (username, email).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Authorization tier of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Role string as persisted and as embedded in token claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Decode a persisted role value, coercing anything unrecognized.
    ///
    /// A stored record with a missing or unknown role must not fail the
    /// read: substitute USER with a warning and continue.
    pub fn from_store(value: Option<&str>, username: &str) -> Self {
        match value.map(str::trim) {
            Some("USER") => Role::User,
            Some("ADMIN") => Role::Admin,
            Some(other) if !other.is_empty() => {
                tracing::warn!(
                    role = other,
                    username,
                    "Invalid stored role, defaulting to USER"
                );
                Role::User
            }
            _ => {
                tracing::warn!(username, "Missing stored role, defaulting to USER");
                Role::User
            }
        }
    }

    /// Interpret a role claim from a token, case-insensitively.
    ///
    /// Anything that is not recognizably ADMIN grants only the USER tier.
    pub fn from_claim(value: &str) -> Self {
        if value.eq_ignore_ascii_case("ADMIN") {
            Role::Admin
        } else {
            Role::User
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-facing projection of a user.
///
/// The credential hash never leaves the core: this is the only shape
/// handed to the serialization boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Option<UserId>,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Registration request fields as received from the caller.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Optional; defaults to the email when blank
    pub username: Option<String>,
    pub email: String,
    pub password: String,
}

/// Login request fields as received from the caller.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$hash".to_string(),
        );

        assert!(user.id.is_none());
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_set_password_hash_advances_updated_at() {
        let mut user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "old".to_string(),
        );
        let before = user.updated_at;

        user.set_password_hash("new".to_string());

        assert_eq!(user.password_hash, "new");
        assert!(user.updated_at >= before);
        assert_eq!(user.created_at, before);
    }

    #[test]
    fn test_role_from_store_coercion() {
        assert_eq!(Role::from_store(Some("USER"), "alice"), Role::User);
        assert_eq!(Role::from_store(Some("ADMIN"), "alice"), Role::Admin);
        // Unrecognized value loads as USER without error
        assert_eq!(Role::from_store(Some("MANAGER"), "alice"), Role::User);
        assert_eq!(Role::from_store(Some(""), "alice"), Role::User);
        assert_eq!(Role::from_store(None, "alice"), Role::User);
    }

    #[test]
    fn test_role_from_claim() {
        assert_eq!(Role::from_claim("ADMIN"), Role::Admin);
        assert_eq!(Role::from_claim("admin"), Role::Admin);
        assert_eq!(Role::from_claim("USER"), Role::User);
        assert_eq!(Role::from_claim("MANAGER"), Role::User);
    }

    #[test]
    fn test_user_view_omits_credential_hash() {
        let mut user = User::with_role(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$hash".to_string(),
            Role::Admin,
        );
        user.id = Some(UserId::new());

        let view = UserView::from(&user);
        let json = serde_json::to_value(&view).expect("Failed to serialize view");

        let object = json.as_object().expect("View must serialize to an object");
        assert!(!object.contains_key("passwordHash"));
        assert!(!object.contains_key("password_hash"));
        assert_eq!(object["username"], "alice");
        assert_eq!(object["role"], "ADMIN");
        assert!(object.contains_key("createdAt"));
        assert!(object.contains_key("updatedAt"));
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).expect("Failed to parse id");
        assert_eq!(id, parsed);

        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
