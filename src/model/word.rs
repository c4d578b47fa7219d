//! Domain models for catalog entries and search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Publication status of a catalog entry.
///
/// Entries created through the public submission flow start as `Pending`;
/// the approval workflow is the only path that promotes them to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum WordStatus {
    Pending,
    Active,
}

impl WordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "Active" => Some(Self::Active),
            _ => None,
        }
    }
}

/// Published dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Word {
    pub id: i32,
    pub term: String,
    pub class: String,
    pub meaning: String,
    pub pronunciation: String,
    pub history: String,
    pub example: String,
    pub status: WordStatus,
    pub search_count: i32,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Word {
    /// Converts an entity model to a word domain model at the repository boundary.
    pub fn from_entity(entity: entity::word::Model) -> Self {
        Self {
            id: entity.id,
            term: entity.term,
            class: entity.class,
            meaning: entity.meaning,
            pronunciation: entity.pronunciation,
            history: entity.history,
            example: entity.example,
            status: WordStatus::parse(&entity.status).unwrap_or(WordStatus::Pending),
            search_count: entity.search_count,
            added_at: entity.added_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a catalog entry.
///
/// Descriptive fields default to empty; `status` defaults to `Pending`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateWordParams {
    pub term: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub example: String,
    pub status: Option<WordStatus>,
}

/// Partial update of a catalog entry; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateWordParams {
    pub term: Option<String>,
    pub class: Option<String>,
    pub meaning: Option<String>,
    pub pronunciation: Option<String>,
    pub history: Option<String>,
    pub example: Option<String>,
    pub status: Option<WordStatus>,
}

/// Ledger-backed search hit: a term that is only pending, not yet published.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PendingMatch {
    pub word: String,
    pub description: String,
}

/// Outcome of a successful search: either published entries or, when the
/// catalog has no match, the pending submissions covering the query.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SearchResults {
    Published(Vec<Word>),
    Requested(Vec<PendingMatch>),
}
