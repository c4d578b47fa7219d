use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashSet;

use crate::model::word::{CreateWordParams, UpdateWordParams, Word, WordStatus};

/// Case-insensitive substring match against the term column.
fn term_matches(query: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(entity::word::Column::Term)))
        .like(format!("%{}%", query.to_lowercase()))
}

/// Collapses duplicate terms, keeping the first row seen per term.
///
/// Callers must order by `added_at` descending (within a term) so that
/// "first seen" is the most recently published row.
fn dedup_newest(models: Vec<entity::word::Model>) -> Vec<Word> {
    let mut seen = HashSet::new();
    models
        .into_iter()
        .filter(|model| seen.insert(model.term.clone()))
        .map(Word::from_entity)
        .collect()
}

pub struct WordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new catalog entry, defaulting to `Pending` status
    pub async fn create(&self, params: CreateWordParams) -> Result<Word, DbErr> {
        let now = Utc::now();
        let status = params.status.unwrap_or(WordStatus::Pending);

        let model = entity::word::ActiveModel {
            term: ActiveValue::Set(params.term),
            class: ActiveValue::Set(params.class),
            meaning: ActiveValue::Set(params.meaning),
            pronunciation: ActiveValue::Set(params.pronunciation),
            history: ActiveValue::Set(params.history),
            example: ActiveValue::Set(params.example),
            status: ActiveValue::Set(status.as_str().to_string()),
            search_count: ActiveValue::Set(0),
            added_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Word::from_entity(model))
    }

    /// Gets a catalog entry by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Word>, DbErr> {
        let model = entity::prelude::Word::find_by_id(id).one(self.db).await?;

        Ok(model.map(Word::from_entity))
    }

    /// Gets all catalog entries, one row per term with the newest winning
    pub async fn get_all(&self) -> Result<Vec<Word>, DbErr> {
        let models = entity::prelude::Word::find()
            .order_by_asc(entity::word::Column::Term)
            .order_by_desc(entity::word::Column::AddedAt)
            .all(self.db)
            .await?;

        Ok(dedup_newest(models))
    }

    /// Gets the most recently added entries
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Word>, DbErr> {
        let models = entity::prelude::Word::find()
            .order_by_desc(entity::word::Column::AddedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Word::from_entity).collect())
    }

    /// Gets the entries with the highest search counters
    pub async fn get_top_searched(&self, limit: u64) -> Result<Vec<Word>, DbErr> {
        let models = entity::prelude::Word::find()
            .order_by_desc(entity::word::Column::SearchCount)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Word::from_entity).collect())
    }

    /// Applies a partial update to a catalog entry
    ///
    /// Returns None if no entry with the given ID exists.
    pub async fn update(&self, id: i32, params: UpdateWordParams) -> Result<Option<Word>, DbErr> {
        let Some(model) = entity::prelude::Word::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::word::ActiveModel = model.into();
        if let Some(term) = params.term {
            active.term = ActiveValue::Set(term);
        }
        if let Some(class) = params.class {
            active.class = ActiveValue::Set(class);
        }
        if let Some(meaning) = params.meaning {
            active.meaning = ActiveValue::Set(meaning);
        }
        if let Some(pronunciation) = params.pronunciation {
            active.pronunciation = ActiveValue::Set(pronunciation);
        }
        if let Some(history) = params.history {
            active.history = ActiveValue::Set(history);
        }
        if let Some(example) = params.example {
            active.example = ActiveValue::Set(example);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Word::from_entity(updated)))
    }

    /// Deletes a catalog entry, returning whether a row existed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Word::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Case-insensitive substring search, one row per term with the newest winning
    pub async fn search(&self, query: &str) -> Result<Vec<Word>, DbErr> {
        let models = entity::prelude::Word::find()
            .filter(term_matches(query))
            .order_by_asc(entity::word::Column::Term)
            .order_by_desc(entity::word::Column::AddedAt)
            .all(self.db)
            .await?;

        Ok(dedup_newest(models))
    }

    /// Increments the search counter of every row matching the query
    ///
    /// Returns the number of rows touched. Duplicated terms are all
    /// incremented, matching the read-time-dedup data model.
    pub async fn increment_search_count(&self, query: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Word::update_many()
            .col_expr(
                entity::word::Column::SearchCount,
                Expr::col(entity::word::Column::SearchCount).add(1),
            )
            .filter(term_matches(query))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Picks a uniformly random catalog entry
    pub async fn random(&self) -> Result<Option<Word>, DbErr> {
        let model = entity::prelude::Word::find()
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(self.db)
            .await?;

        Ok(model.map(Word::from_entity))
    }

    /// Counts all catalog rows, duplicates included
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Word::find().count(self.db).await
    }

    /// Counts catalog rows carrying the given status
    pub async fn count_by_status(&self, status: WordStatus) -> Result<u64, DbErr> {
        entity::prelude::Word::find()
            .filter(entity::word::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
