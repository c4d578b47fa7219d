//! Bearer-token auth guard.
//!
//! Every mutating endpoint builds an [`AuthGuard`] and calls
//! [`AuthGuard::require`] with the role set it accepts; there are no
//! per-route ad hoc checks. The guard rejects absent or malformed headers,
//! consults the logout blacklist before decoding, verifies the signature
//! and expiry, and finally checks the embedded role.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::token::InvalidatedTokenRepository,
    error::{auth::AuthError, AppError},
    model::auth::Role,
    util::jwt::{Claims, JwtKeys},
};

/// Role set accepted by endpoints any authenticated staff member may call.
pub const ANY_ACTOR: &[Role] = &[Role::Admin, Role::Superadmin];

/// Role set for operations reserved to super-admins.
pub const SUPERADMIN_ONLY: &[Role] = &[Role::Superadmin];

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, keys, headers }
    }

    /// Extracts the raw bearer token from the Authorization header.
    pub fn token(&self) -> Result<&'a str, AuthError> {
        let Some(header) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
        else {
            return Err(AuthError::MissingToken);
        };

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or(AuthError::InvalidToken)?;
        if token.is_empty() {
            return Err(AuthError::InvalidToken);
        }

        Ok(token)
    }

    /// Verifies the presented token and checks its role against `roles`.
    ///
    /// The blacklist lookup runs before signature verification so an
    /// invalidated token is rejected even while cryptographically valid.
    pub async fn require(&self, roles: &[Role]) -> Result<Claims, AppError> {
        let token = self.token()?;

        if InvalidatedTokenRepository::new(self.db)
            .contains(token)
            .await?
        {
            return Err(AuthError::TokenInvalidated.into());
        }

        let claims = self.keys.verify(token)?;

        if !roles.contains(&claims.role) {
            return Err(AuthError::AccessDenied(claims.sub).into());
        }

        Ok(claims)
    }
}
