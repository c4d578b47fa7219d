//! User request factory for creating test ledger entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user requests with customizable fields.
///
/// New requests default to the freshly-submitted shape: `Pending` status,
/// unapproved, no approval audit fields.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    word: String,
    description: String,
    requested_by: String,
    status: String,
    approved: bool,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory with default values.
    ///
    /// Defaults:
    /// - word: `"requested{id}"` where id is auto-incremented
    /// - requested_by: `"Anonymous"`
    /// - status: `"Pending"`, approved: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            word: format!("requested{}", id),
            description: format!("Please add requested{}", id),
            requested_by: "Anonymous".to_string(),
            status: "Pending".to_string(),
            approved: false,
        }
    }

    /// Sets the requested word.
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.word = word.into();
        self
    }

    /// Sets the request description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the submitter identifier.
    pub fn requested_by(mut self, requested_by: impl Into<String>) -> Self {
        self.requested_by = requested_by.into();
        self
    }

    /// Sets the status literal.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the approved flag.
    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    /// Builds and inserts the request entity into the database.
    pub async fn build(self) -> Result<entity::user_request::Model, DbErr> {
        let now = Utc::now();
        entity::user_request::ActiveModel {
            word: ActiveValue::Set(self.word),
            description: ActiveValue::Set(self.description),
            requested_by: ActiveValue::Set(self.requested_by),
            status: ActiveValue::Set(self.status),
            approved: ActiveValue::Set(self.approved),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            requested_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending request with default values.
pub async fn create_request(db: &DatabaseConnection) -> Result<entity::user_request::Model, DbErr> {
    RequestFactory::new(db).build().await
}

/// Creates a pending request for a specific word.
pub async fn create_request_for_word(
    db: &DatabaseConnection,
    word: impl Into<String>,
) -> Result<entity::user_request::Model, DbErr> {
    RequestFactory::new(db).word(word).build().await
}
