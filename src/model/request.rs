//! Domain models for the user request ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical lifecycle literals for a ledger entry.
///
/// The approval workflow only ever moves a row from `Pending` to `Resolved`.
/// The status-override operation may write other text, which is why
/// [`WordRequest::status`] stays a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    Pending,
    Resolved,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
        }
    }
}

/// Ledger entry: a user-submitted new-word or change request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WordRequest {
    pub id: i32,
    pub word: String,
    pub description: String,
    pub requested_by: String,
    pub status: String,
    pub approved: bool,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub requested_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WordRequest {
    /// Converts an entity model to a request domain model at the repository boundary.
    pub fn from_entity(entity: entity::user_request::Model) -> Self {
        Self {
            id: entity.id,
            word: entity.word,
            description: entity.description,
            requested_by: entity.requested_by,
            status: entity.status,
            approved: entity.approved,
            approved_by: entity.approved_by,
            approved_at: entity.approved_at,
            requested_at: entity.requested_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for submitting a new-word request.
///
/// Status and approval fields are never taken from the caller; submissions
/// are always initialized to pending/unapproved.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRequestParams {
    pub word: String,
    pub description: String,
    pub requested_by: Option<String>,
}

/// Parameters for requesting a change to an existing word.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestParams {
    pub word: String,
    pub section_to_update: String,
}

/// Body of the approval endpoint. `approved = false` rejects the request.
/// `word`/`description` may override the submitted values on approval.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ApproveRequestParams {
    pub approved: bool,
    pub word: Option<String>,
    pub description: Option<String>,
}

/// Body of the admin status-override endpoint.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRequestStatusParams {
    pub status: String,
}
