//! Bearer token issuance and validation.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload: the username
//! as subject, the user id, the admin flag and an absolute UTC expiry. There
//! is no refresh or revocation; a token stays valid until `exp` passes.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use soundvault_core::types::DbId;

/// Claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's username.
    pub sub: String,
    /// The user's internal database id.
    pub id: DbId,
    /// Whether the user was an admin when the token was issued.
    #[serde(default)]
    pub is_admin: bool,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Why a presented token was not accepted.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Bad signature, malformed payload, missing `id`, or expired.
    #[error("token rejected: {0}")]
    Rejected(#[from] jsonwebtoken::errors::Error),

    /// The token decoded but carries an empty subject.
    #[error("token has no subject")]
    MissingSubject,
}

/// Configuration for token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 30).
    pub access_token_expiry_mins: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 30;

impl JwtConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `30`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Lifetime given to tokens issued at login.
    pub fn access_token_ttl(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_mins)
    }
}

/// Issue an HS256 access token for the given user, valid for `ttl`.
pub fn generate_access_token(
    username: &str,
    user_id: DbId,
    is_admin: bool,
    ttl: Duration,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();

    let claims = Claims {
        sub: username.to_string(),
        id: user_id,
        is_admin,
        exp: (now + ttl).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Signature and expiry are checked by `jsonwebtoken`; a payload without
/// `sub` or `id` fails to decode and is rejected the same way.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;

    if token_data.claims.sub.is_empty() {
        return Err(TokenError::MissingSubject);
    }
    Ok(token_data.claims)
}
