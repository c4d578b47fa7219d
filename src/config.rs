use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const MIN_JWT_SECRET_LEN: usize = 32;

/// Seed credentials for the initial super-admin account.
pub struct SeedSuperAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,

    /// Optional; when set and the superadmins table is empty at startup,
    /// the account is created automatically.
    pub seed_super_admin: Option<SeedSuperAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::WeakJwtSecret.into());
        }

        let seed_super_admin = match (
            std::env::var("SUPERADMIN_EMAIL"),
            std::env::var("SUPERADMIN_PASSWORD"),
        ) {
            (Ok(email), Ok(password)) => Some(SeedSuperAdmin {
                name: std::env::var("SUPERADMIN_NAME")
                    .unwrap_or_else(|_| "Super Admin".to_string()),
                email,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            seed_super_admin,
        })
    }
}
