use sea_orm::DatabaseConnection;

use crate::{
    data::request::RequestRepository,
    error::AppError,
    model::request::{ChangeRequestParams, CreateRequestParams, WordRequest},
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new-word submission.
    ///
    /// The entry always starts pending and unapproved; caller-supplied
    /// status or approval fields are ignored by construction.
    pub async fn submit(&self, params: CreateRequestParams) -> Result<WordRequest, AppError> {
        if params.word.is_empty() || params.description.is_empty() {
            return Err(AppError::BadRequest(
                "Word and description are required".to_string(),
            ));
        }

        let repo = RequestRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Records a change request against an existing word.
    ///
    /// The ledger does not verify the word actually exists in the catalog;
    /// that reconciliation is deferred to approval.
    pub async fn submit_change(&self, params: ChangeRequestParams) -> Result<WordRequest, AppError> {
        if params.word.is_empty() || params.section_to_update.is_empty() {
            return Err(AppError::BadRequest(
                "Word and sectionToUpdate are required".to_string(),
            ));
        }

        let repo = RequestRepository::new(self.db);

        let description = format!("Update {} for {}", params.section_to_update, params.word);

        Ok(repo
            .create(CreateRequestParams {
                word: params.word,
                description,
                requested_by: None,
            })
            .await?)
    }

    /// Lists all ledger entries, newest first
    pub async fn list(&self) -> Result<Vec<WordRequest>, AppError> {
        let repo = RequestRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a single ledger entry
    pub async fn get(&self, id: i32) -> Result<WordRequest, AppError> {
        let repo = RequestRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Request not found".to_string()))
    }

    /// Deletes a ledger entry
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = RequestRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Request not found".to_string()));
        }

        Ok(())
    }

    /// Admin status override: rewrites the status text on a ledger entry.
    ///
    /// Deliberately bypasses the approval workflow and never touches the
    /// catalog; it also does not count as an approve or reject transition.
    pub async fn override_status(&self, id: i32, status: &str) -> Result<WordRequest, AppError> {
        let repo = RequestRepository::new(self.db);

        repo.update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Request not found".to_string()))
    }
}
