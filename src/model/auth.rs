//! Authentication models shared by the token layer and the guards.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Actor role embedded in every issued token.
///
/// A super-admin is a strict superset of admin privilege; role checks that
/// accept admins therefore list both variants explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}
