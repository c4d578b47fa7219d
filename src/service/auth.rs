use sea_orm::DatabaseConnection;

use crate::{
    data::{
        admin::AdminRepository, super_admin::SuperAdminRepository,
        token::InvalidatedTokenRepository,
    },
    error::{auth::AuthError, AppError},
    model::auth::Role,
    util::{jwt::JwtKeys, password},
};

/// Super-admin sessions run longer than admin sessions.
pub const SUPERADMIN_TOKEN_TTL_SECS: u64 = 2 * 60 * 60;
pub const ADMIN_TOKEN_TTL_SECS: u64 = 60 * 60;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys) -> Self {
        Self { db, keys }
    }

    /// Verifies credentials and issues a signed bearer token.
    ///
    /// Credential stores are consulted in fixed priority order, super-admins
    /// before admins. An unknown email and a wrong password both fail with
    /// the same `InvalidCredentials` so responses carry no user-enumeration
    /// signal.
    pub async fn login(&self, email: &str, plaintext: &str) -> Result<String, AppError> {
        if let Some(super_admin) = SuperAdminRepository::new(self.db).find_by_email(email).await? {
            if !password::verify(plaintext, &super_admin.password)? {
                return Err(AuthError::InvalidCredentials.into());
            }
            return self
                .keys
                .sign(super_admin.id, Role::Superadmin, SUPERADMIN_TOKEN_TTL_SECS);
        }

        if let Some(admin) = AdminRepository::new(self.db).find_by_email(email).await? {
            if !password::verify(plaintext, &admin.password)? {
                return Err(AuthError::InvalidCredentials.into());
            }
            return self.keys.sign(admin.id, Role::Admin, ADMIN_TOKEN_TTL_SECS);
        }

        Err(AuthError::InvalidCredentials.into())
    }

    /// Invalidates a presented token by adding it to the logout blacklist.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        InvalidatedTokenRepository::new(self.db)
            .invalidate(token)
            .await?;

        Ok(())
    }
}
