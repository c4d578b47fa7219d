//! Read-only aggregate report models.

use serde::Serialize;
use utoipa::ToSchema;

/// One calendar day and how many rows fell on it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyCount {
    pub date: String,
    pub count: i64,
}

/// A term and how often it was searched for.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TermCount {
    pub term: String,
    pub count: i64,
}

/// A published term and its lifetime search counter.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TermSearchCount {
    pub term: String,
    pub search_count: i32,
}

/// Visitor-facing usage aggregates derived from the lookups log.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserActivityReport {
    pub unique_visitors: i64,
    pub searches_per_day: Vec<DailyCount>,
    pub popular_search_terms: Vec<TermCount>,
}

/// Catalog-level aggregates.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalyticsReport {
    pub total_words: u64,
    pub active_words: u64,
    pub pending_words: u64,
    pub new_words_per_day: Vec<DailyCount>,
    pub word_updates_per_day: Vec<DailyCount>,
    pub frequently_looked_up_words: Vec<TermSearchCount>,
}

/// Ledger-level aggregates.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestAnalyticsReport {
    pub total_requests: u64,
    pub pending_requests: u64,
    pub resolved_requests: u64,
    pub new_requests_per_day: Vec<DailyCount>,
    pub average_seconds_to_resolve: Option<f64>,
}
