use std::sync::Arc;

use auth::Authenticator;
use auth::AuthenticationError;
use auth::Claims;
use chrono::Duration;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::LoginRequest;
use crate::domain::user::models::RegisterRequest;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserStore;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Default token expiry horizon, in hours.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Orchestrates registration, login, and request authorization.
///
/// Composes the user store, credential hashing, and token issuance and
/// encodes the resulting decisions as outcomes; HTTP status codes and
/// response bodies are the embedding layer's concern.
pub struct AuthService<S: UserStore> {
    store: Arc<S>,
    authenticator: Authenticator,
    token_ttl: Duration,
}

/// Outcome of a successful registration.
///
/// Registration intentionally returns no token; the caller must log in
/// separately to obtain a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub user_id: UserId,
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

/// Identity and tier resolved from a validated token.
///
/// Carries the sole authorization rule of the core: an admin may act on
/// the full user collection, anyone else only on their own record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGrant {
    pub subject: UserId,
    pub role: Role,
}

impl AccessGrant {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether the bearer may act on the record with the given id.
    pub fn may_access(&self, target: &UserId) -> bool {
        self.is_admin() || self.subject == *target
    }
}

impl<S: UserStore> AuthService<S> {
    /// Create the service with an injected store and signing secret.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `jwt_secret` - Token signing key (from configuration)
    /// * `token_ttl_hours` - Token expiry horizon
    pub fn new(store: Arc<S>, jwt_secret: &[u8], token_ttl_hours: i64) -> Self {
        Self {
            store,
            authenticator: Authenticator::new(jwt_secret),
            token_ttl: Duration::hours(token_ttl_hours),
        }
    }

    /// Register a new account.
    ///
    /// A blank username defaults to the email. Only the email is checked
    /// for uniqueness, and only advisorily: two concurrent registrations
    /// with the same email can both pass the check before either inserts.
    ///
    /// # Errors
    /// * `Validation` - Blank email or password shorter than 6 characters
    /// * `EmailExists` - Email is already registered
    /// * `Persistence` - The insert failed
    /// * `Internal` - Credential hashing failed
    pub async fn register(&self, request: RegisterRequest) -> Result<Registration, AuthError> {
        if request.email.trim().is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()));
        }

        let username = match request.username {
            Some(username) if !username.trim().is_empty() => username,
            _ => request.email.clone(),
        };

        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        if self.store.exists_by_email(&request.email).await {
            return Err(AuthError::EmailExists);
        }

        let password_hash = self.authenticator.hash_password(&request.password)?;
        let user = User::new(username, request.email, password_hash);

        let saved = self.store.save(user).await?;
        let user_id = saved
            .id
            .ok_or_else(|| AuthError::Internal("Store returned a user without an id".to_string()))?;

        tracing::info!(user_id = %user_id, username = %saved.username, "User registered");

        Ok(Registration { user_id })
    }

    /// Log in with email and password, minting a session token on success.
    ///
    /// An unknown email and a wrong password produce the same
    /// `InvalidCredentials` outcome so callers cannot enumerate accounts.
    ///
    /// # Errors
    /// * `Validation` - Email or password missing
    /// * `InvalidCredentials` - No such account or password mismatch
    /// * `Internal` - Token issuance failed
    pub async fn login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        if request.email.is_empty() || request.password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let user = self
            .store
            .find_by_email(&request.email)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        let user_id = user
            .id
            .ok_or_else(|| AuthError::Internal("Stored user has no id".to_string()))?;

        let claims = Claims::for_subject(
            user_id,
            &user.username,
            &user.email,
            user.role.as_str(),
            self.token_ttl,
        );

        let result = self
            .authenticator
            .authenticate(&request.password, &user.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
                AuthenticationError::Jwt(err) => {
                    AuthError::Internal(format!("Token generation failed: {}", err))
                }
            })?;

        tracing::info!(email = %user.email, "User logged in");

        Ok(Session {
            token: result.access_token,
            role: user.role,
        })
    }

    /// Resolve an `Authorization` header into an access grant.
    ///
    /// # Errors
    /// * `TokenRequired` - Header missing or not a Bearer header
    /// * `InvalidToken` - Token failed validation
    pub fn authorize(&self, authorization: Option<&str>) -> Result<AccessGrant, AuthError> {
        let header = authorization.ok_or(AuthError::TokenRequired)?;
        let token = bearer_token(header).ok_or(AuthError::TokenRequired)?;
        self.authorize_token(token)
    }

    /// Resolve a raw bearer token into an access grant.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, format, or expiry check failed
    pub fn authorize_token(&self, token: &str) -> Result<AccessGrant, AuthError> {
        let tokens = self.authenticator.token_service();

        if !tokens.validate(token) {
            return Err(AuthError::InvalidToken);
        }

        let claims = tokens.claims_of(token).map_err(|e| {
            tracing::warn!(error = %e, "Validated token failed claim extraction");
            AuthError::InvalidToken
        })?;

        let subject = UserId::from_string(&claims.sub).map_err(|e| {
            tracing::warn!(error = %e, "Token subject is not a valid user id");
            AuthError::InvalidToken
        })?;

        Ok(AccessGrant {
            subject,
            role: Role::from_claim(&claims.role),
        })
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}
