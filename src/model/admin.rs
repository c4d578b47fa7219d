//! Domain models for administrator accounts, invitations, and dashboards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::request::WordRequest;

/// Administrator account as exposed over the API. The password hash never
/// leaves the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdminAccount {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl AdminAccount {
    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new admin row. `password_hash` must already
/// be a PHC-formatted argon2 hash.
#[derive(Debug, Clone)]
pub struct CreateAdminParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Pending admin invitation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Invitation {
    pub id: i32,
    pub email: String,
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl Invitation {
    pub fn from_entity(entity: entity::invitation::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            token: entity.token,
            expires: entity.expires,
        }
    }

    /// Whether the invitation deadline has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }
}

/// Body of the invite endpoint.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct InviteAdminParams {
    pub email: String,
}

/// Body of the invitation-backed registration endpoint.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterAdminParams {
    pub token: String,
    pub name: String,
    pub password: String,
}

/// Admin dashboard payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub admin_name: String,
    pub word_count: u64,
    pub request_count: u64,
    pub recent_requests: Vec<WordRequest>,
}

/// Super-admin dashboard payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuperAdminDashboard {
    pub admin_count: u64,
    pub word_count: u64,
    pub request_count: u64,
}
