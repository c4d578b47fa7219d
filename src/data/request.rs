use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{
    request::{CreateRequestParams, RequestStatus, WordRequest},
    word::PendingMatch,
};

/// Case-insensitive substring match against the requested word.
fn word_matches(query: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(entity::user_request::Column::Word)))
        .like(format!("%{}%", query.to_lowercase()))
}

pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a ledger entry for a user submission.
    ///
    /// Lifecycle fields are always initialized to pending/unapproved here;
    /// callers cannot override them.
    pub async fn create(&self, params: CreateRequestParams) -> Result<WordRequest, DbErr> {
        let now = Utc::now();

        let model = entity::user_request::ActiveModel {
            word: ActiveValue::Set(params.word),
            description: ActiveValue::Set(params.description),
            requested_by: ActiveValue::Set(
                params
                    .requested_by
                    .unwrap_or_else(|| "Anonymous".to_string()),
            ),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            approved: ActiveValue::Set(false),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            requested_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(WordRequest::from_entity(model))
    }

    /// Gets all ledger entries, newest submission first
    pub async fn get_all(&self) -> Result<Vec<WordRequest>, DbErr> {
        let models = entity::prelude::UserRequest::find()
            .order_by_desc(entity::user_request::Column::RequestedAt)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(WordRequest::from_entity).collect())
    }

    /// Gets the most recently submitted entries
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<WordRequest>, DbErr> {
        let models = entity::prelude::UserRequest::find()
            .order_by_desc(entity::user_request::Column::RequestedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(WordRequest::from_entity).collect())
    }

    /// Gets a ledger entry by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<WordRequest>, DbErr> {
        let model = entity::prelude::UserRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(model.map(WordRequest::from_entity))
    }

    /// Deletes a ledger entry, returning whether a row existed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserRequest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Case-insensitive substring search over pending submissions.
    ///
    /// Serves as the search fallback when the catalog has no match.
    pub async fn search(&self, query: &str) -> Result<Vec<PendingMatch>, DbErr> {
        let models = entity::prelude::UserRequest::find()
            .filter(word_matches(query))
            .order_by_asc(entity::user_request::Column::Word)
            .all(self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(|model| PendingMatch {
                word: model.word,
                description: model.description,
            })
            .collect())
    }

    /// Overwrites the status text of a ledger entry.
    ///
    /// This is the admin escape hatch: it touches only the ledger row and
    /// never the catalog, and does not count as an approve/reject
    /// transition. Returns None if no entry with the given ID exists.
    pub async fn update_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<Option<WordRequest>, DbErr> {
        let Some(model) = entity::prelude::UserRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user_request::ActiveModel = model.into();
        active.status = ActiveValue::Set(status.to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(WordRequest::from_entity(updated)))
    }

    /// Counts all ledger rows
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::UserRequest::find().count(self.db).await
    }

    /// Counts ledger rows carrying the given status literal
    pub async fn count_by_status(&self, status: &str) -> Result<u64, DbErr> {
        entity::prelude::UserRequest::find()
            .filter(entity::user_request::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
