use sea_orm::DatabaseConnection;

use crate::{
    data::{analytics::AnalyticsRepository, request::RequestRepository, word::WordRepository},
    error::AppError,
    model::{
        analytics::{RequestAnalyticsReport, UserActivityReport, WordAnalyticsReport},
        request::RequestStatus,
        word::WordStatus,
    },
};

/// Top-N cutoff for the popular-terms and most-searched listings.
const TOP_TERMS_LIMIT: u64 = 10;

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Visitor-facing usage aggregates from the lookups log
    pub async fn user_activity(&self) -> Result<UserActivityReport, AppError> {
        let repo = AnalyticsRepository::new(self.db);

        Ok(UserActivityReport {
            unique_visitors: repo.unique_visitors().await?,
            searches_per_day: repo.searches_per_day().await?,
            popular_search_terms: repo.popular_search_terms(TOP_TERMS_LIMIT).await?,
        })
    }

    /// Catalog-level aggregates
    pub async fn word_analytics(&self) -> Result<WordAnalyticsReport, AppError> {
        let words = WordRepository::new(self.db);
        let repo = AnalyticsRepository::new(self.db);

        Ok(WordAnalyticsReport {
            total_words: words.count().await?,
            active_words: words.count_by_status(WordStatus::Active).await?,
            pending_words: words.count_by_status(WordStatus::Pending).await?,
            new_words_per_day: repo.new_words_per_day().await?,
            word_updates_per_day: repo.word_updates_per_day().await?,
            frequently_looked_up_words: repo.top_searched_words(TOP_TERMS_LIMIT).await?,
        })
    }

    /// Ledger-level aggregates
    pub async fn request_analytics(&self) -> Result<RequestAnalyticsReport, AppError> {
        let requests = RequestRepository::new(self.db);
        let repo = AnalyticsRepository::new(self.db);

        Ok(RequestAnalyticsReport {
            total_requests: requests.count().await?,
            pending_requests: requests
                .count_by_status(RequestStatus::Pending.as_str())
                .await?,
            resolved_requests: requests
                .count_by_status(RequestStatus::Resolved.as_str())
                .await?,
            new_requests_per_day: repo.new_requests_per_day().await?,
            average_seconds_to_resolve: repo.average_resolution_seconds().await?,
        })
    }
}
