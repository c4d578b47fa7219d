//! The approval workflow: the one place where the request ledger and the
//! word catalog are mutated as a single unit of work.
//!
//! A pending request has exactly two terminal transitions, each valid once:
//!
//! - **approve**: reconcile the catalog (publish or re-publish the term),
//!   then mark the ledger row resolved with its audit fields.
//! - **reject**: delete the ledger row outright; the catalog is untouched.
//!
//! Approval runs inside a database transaction with a compare-and-set on the
//! ledger row's status, so concurrent approve/approve or approve/reject races
//! on the same request cannot both succeed and double-publish the term.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, SqlErr, TransactionTrait,
};

use crate::{
    error::AppError,
    model::{
        request::{ApproveRequestParams, RequestStatus, WordRequest},
        word::WordStatus,
    },
};

const REQUEST_NOT_FOUND: &str = "Request not found";

/// Maps a unique-term violation to a client-visible conflict.
///
/// Only reachable when the store enforces uniqueness on `words.term`; the
/// default schema does not, but the workflow must fail atomically if such a
/// constraint is added.
fn map_term_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Word already exists in the dictionary".to_string())
        }
        _ => AppError::DbErr(err),
    }
}

pub struct ApprovalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApprovalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Approves a pending request and publishes its term.
    ///
    /// The caller may override the submitted `word`/`description`; absent
    /// overrides fall back to the values on the ledger row. The catalog
    /// write and the ledger resolution commit or roll back together:
    ///
    /// 1. Load the ledger row; absent or already resolved is not-found.
    /// 2. If the term exists in the catalog, re-publish it in place
    ///    (status `Active`, `added_at` refreshed). Otherwise insert a new
    ///    `Active` entry with empty descriptive fields and a zero counter.
    /// 3. Compare-and-set the ledger row out of `Pending`. Losing the race
    ///    (zero rows updated) rolls everything back as not-found.
    pub async fn approve(
        &self,
        request_id: i32,
        params: ApproveRequestParams,
        approver: &str,
    ) -> Result<WordRequest, AppError> {
        let txn = self.db.begin().await?;

        let Some(request) = entity::prelude::UserRequest::find_by_id(request_id)
            .one(&txn)
            .await?
        else {
            return Err(AppError::NotFound(REQUEST_NOT_FOUND.to_string()));
        };
        if request.status != RequestStatus::Pending.as_str() {
            return Err(AppError::NotFound(REQUEST_NOT_FOUND.to_string()));
        }

        let word = params.word.unwrap_or_else(|| request.word.clone());
        let description = params
            .description
            .unwrap_or_else(|| request.description.clone());
        let now = Utc::now();

        let existing = entity::prelude::Word::find()
            .filter(entity::word::Column::Term.eq(word.as_str()))
            .one(&txn)
            .await?;

        match existing {
            Some(model) => {
                // Re-publish in place; added_at doubles as the publication
                // timestamp, not creation time.
                let mut active: entity::word::ActiveModel = model.into();
                active.status = ActiveValue::Set(WordStatus::Active.as_str().to_string());
                active.added_at = ActiveValue::Set(now);
                active.updated_at = ActiveValue::Set(now);
                active.update(&txn).await.map_err(map_term_conflict)?;
            }
            None => {
                entity::word::ActiveModel {
                    term: ActiveValue::Set(word.clone()),
                    class: ActiveValue::Set(String::new()),
                    meaning: ActiveValue::Set(String::new()),
                    pronunciation: ActiveValue::Set(String::new()),
                    history: ActiveValue::Set(String::new()),
                    example: ActiveValue::Set(String::new()),
                    status: ActiveValue::Set(WordStatus::Active.as_str().to_string()),
                    search_count: ActiveValue::Set(0),
                    added_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(map_term_conflict)?;
            }
        }

        // Only one transition out of Pending may ever succeed.
        let updated = entity::prelude::UserRequest::update_many()
            .col_expr(entity::user_request::Column::Approved, Expr::value(true))
            .col_expr(
                entity::user_request::Column::Word,
                Expr::value(word.clone()),
            )
            .col_expr(
                entity::user_request::Column::Description,
                Expr::value(description),
            )
            .col_expr(
                entity::user_request::Column::Status,
                Expr::value(RequestStatus::Resolved.as_str()),
            )
            .col_expr(
                entity::user_request::Column::ApprovedBy,
                Expr::value(approver.to_string()),
            )
            .col_expr(entity::user_request::Column::ApprovedAt, Expr::value(now))
            .col_expr(entity::user_request::Column::UpdatedAt, Expr::value(now))
            .filter(entity::user_request::Column::Id.eq(request_id))
            .filter(entity::user_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .exec(&txn)
            .await?;

        if updated.rows_affected == 0 {
            // Raced with another resolution; dropping the transaction rolls
            // the catalog write back.
            return Err(AppError::NotFound(REQUEST_NOT_FOUND.to_string()));
        }

        let resolved = entity::prelude::UserRequest::find_by_id(request_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Request {} missing after approval update",
                    request_id
                ))
            })?;

        txn.commit().await?;

        tracing::info!("Request {} approved by {}, term '{}'", request_id, approver, word);

        Ok(WordRequest::from_entity(resolved))
    }

    /// Rejects a request by deleting its ledger row.
    ///
    /// Rejection leaves no audit trail and never touches the catalog. Only
    /// `Pending` rows qualify: rejecting a missing or already-resolved id is
    /// not-found, so each request gets exactly one terminal transition.
    pub async fn reject(&self, request_id: i32) -> Result<(), AppError> {
        let result = entity::prelude::UserRequest::delete_many()
            .filter(entity::user_request::Column::Id.eq(request_id))
            .filter(entity::user_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(REQUEST_NOT_FOUND.to_string()));
        }

        tracing::info!("Request {} rejected", request_id);

        Ok(())
    }
}
