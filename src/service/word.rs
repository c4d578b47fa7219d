use sea_orm::DatabaseConnection;

use crate::{
    data::{lookup::LookupRepository, request::RequestRepository, word::WordRepository},
    error::AppError,
    model::word::{CreateWordParams, SearchResults, UpdateWordParams, Word},
};

/// How many entries the recently-added and top-lookups feeds return.
const FEED_LIMIT: u64 = 3;

pub struct WordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the catalog, one entry per term with the newest winning
    pub async fn list(&self) -> Result<Vec<Word>, AppError> {
        let repo = WordRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a single catalog entry
    pub async fn get(&self, id: i32) -> Result<Word, AppError> {
        let repo = WordRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Word not found".to_string()))
    }

    /// Creates a catalog entry
    pub async fn create(&self, params: CreateWordParams) -> Result<Word, AppError> {
        if params.term.is_empty() {
            return Err(AppError::BadRequest("Term is required".to_string()));
        }

        let repo = WordRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Applies a partial update to a catalog entry
    pub async fn update(&self, id: i32, params: UpdateWordParams) -> Result<Word, AppError> {
        let repo = WordRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Word not found".to_string()))
    }

    /// Deletes a catalog entry
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = WordRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Word not found".to_string()));
        }

        Ok(())
    }

    /// Gets the most recently added entries
    pub async fn recent(&self) -> Result<Vec<Word>, AppError> {
        let repo = WordRepository::new(self.db);

        Ok(repo.get_recent(FEED_LIMIT).await?)
    }

    /// Gets the most searched-for entries
    pub async fn top_lookups(&self) -> Result<Vec<Word>, AppError> {
        let repo = WordRepository::new(self.db);

        Ok(repo.get_top_searched(FEED_LIMIT).await?)
    }

    /// Case-insensitive substring search across catalog and ledger.
    ///
    /// Every search is appended to the lookups log. A catalog hit bumps the
    /// search counter of every matching row as an observable side effect; a
    /// catalog miss falls back to pending submissions without counting
    /// anything. A miss in both tables is not-found.
    pub async fn search(&self, query: &str, ip_address: &str) -> Result<SearchResults, AppError> {
        LookupRepository::new(self.db).log(query, ip_address).await?;

        let words = WordRepository::new(self.db);
        let matches = words.search(query).await?;

        if !matches.is_empty() {
            words.increment_search_count(query).await?;
            return Ok(SearchResults::Published(matches));
        }

        let pending = RequestRepository::new(self.db).search(query).await?;
        if !pending.is_empty() {
            return Ok(SearchResults::Requested(pending));
        }

        Err(AppError::NotFound(
            "No words found matching the query".to_string(),
        ))
    }
}
