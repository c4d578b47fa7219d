//! Signed, time-limited bearer tokens.
//!
//! Tokens are HS256-signed and embed the actor's id and role. Verification
//! collapses every decode failure (malformed, bad signature, expired) into a
//! single `AuthError::InvalidToken` so responses carry no hint of which check
//! failed. The logout blacklist is checked separately by the auth guard.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    error::{auth::AuthError, AppError},
    model::auth::Role,
};

/// Payload embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Actor id in its role-specific credential table.
    pub sub: i32,
    /// Role granted at login time.
    pub role: Role,
    /// Issued at (Unix timestamp).
    pub iat: u64,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
}

/// Signing and verification keys derived from the configured secret.
///
/// Cheap to clone; lives in `AppState` for the lifetime of the process.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for the given actor, expiring `ttl_seconds` from now.
    pub fn sign(&self, sub: i32, role: Role, ttl_seconds: u64) -> Result<String, AppError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::InternalError(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub,
            role,
            iat: now,
            exp: now + ttl_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Verifies and decodes a token, including its expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
