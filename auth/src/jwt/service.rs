use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Issues and validates signed session tokens.
///
/// Wraps [`JwtHandler`] with the concrete [`Claims`] shape and the expiry
/// policy: `validate` is the non-throwing fail-closed check, while the
/// claim extractors (`subject_of`, `role_of`, `claims_of`) verify the
/// signature and error on any parse failure. Callers that need a
/// non-throwing path must call `validate` first.
pub struct TokenService {
    handler: JwtHandler,
}

impl TokenService {
    /// Create a token service signing with the given secret.
    ///
    /// The secret comes from configuration so tokens survive process
    /// restarts; it is never generated here.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            handler: JwtHandler::new(secret),
        }
    }

    /// Sign the claims into a compact token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, claims: &Claims) -> Result<String, JwtError> {
        self.handler.encode(claims)
    }

    /// Check that a token is authentic and not yet expired.
    ///
    /// Fail-closed: any parse or signature failure yields `false`, and the
    /// expiry comparison is strict (a token expiring exactly now is
    /// expired). Uses the local system clock.
    pub fn validate(&self, token: &str) -> bool {
        match self.handler.decode::<Claims>(token) {
            Ok(claims) => !claims.is_expired(Utc::now().timestamp()),
            Err(_) => false,
        }
    }

    /// Decode the claims of a signature-verified token.
    ///
    /// Expiry is not checked here; call [`TokenService::validate`] first.
    ///
    /// # Errors
    /// * `DecodingFailed` - Token is malformed or the signature is invalid
    pub fn claims_of(&self, token: &str) -> Result<Claims, JwtError> {
        self.handler.decode(token)
    }

    /// Extract the subject (user id) from a token.
    ///
    /// # Errors
    /// * `DecodingFailed` - Token is malformed or the signature is invalid
    pub fn subject_of(&self, token: &str) -> Result<String, JwtError> {
        Ok(self.claims_of(token)?.sub)
    }

    /// Extract the role string from a token.
    ///
    /// # Errors
    /// * `DecodingFailed` - Token is malformed or the signature is invalid
    pub fn role_of(&self, token: &str) -> Result<String, JwtError> {
        Ok(self.claims_of(token)?.role)
    }
}
