//! Aggregate queries backing the analytics endpoints.
//!
//! All methods are read-only group-bys and counts over the words,
//! user_request, and lookups tables. Day bucketing and the resolution-time
//! average use SQLite date functions, matching the configured backend.

use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::analytics::{DailyCount, TermCount, TermSearchCount};

pub struct AnalyticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Number of distinct IP addresses that ever searched
    pub async fn unique_visitors(&self) -> Result<i64, DbErr> {
        let count: Option<i64> = entity::prelude::Lookup::find()
            .select_only()
            .column_as(
                Expr::expr(Func::count_distinct(Expr::col(
                    entity::lookup::Column::IpAddress,
                ))),
                "unique_visitors",
            )
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(count.unwrap_or(0))
    }

    /// Searches per calendar day, oldest day first
    pub async fn searches_per_day(&self) -> Result<Vec<DailyCount>, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::Lookup::find()
            .select_only()
            .column_as(Expr::cust("DATE(created_at)"), "date")
            .column_as(
                Expr::expr(Func::count(Expr::col(entity::lookup::Column::Id))),
                "count",
            )
            .group_by(Expr::cust("DATE(created_at)"))
            .order_by(Expr::cust("DATE(created_at)"), Order::Asc)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect())
    }

    /// Most searched-for query terms, by lookup log volume
    pub async fn popular_search_terms(&self, limit: u64) -> Result<Vec<TermCount>, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::Lookup::find()
            .select_only()
            .column(entity::lookup::Column::Term)
            .column_as(
                Expr::expr(Func::count(Expr::col(entity::lookup::Column::Id))),
                "count",
            )
            .group_by(entity::lookup::Column::Term)
            .order_by(
                Expr::expr(Func::count(Expr::col(entity::lookup::Column::Id))),
                Order::Desc,
            )
            .limit(limit)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(term, count)| TermCount { term, count })
            .collect())
    }

    /// Catalog rows added per calendar day
    pub async fn new_words_per_day(&self) -> Result<Vec<DailyCount>, DbErr> {
        self.words_per_day("DATE(added_at)").await
    }

    /// Catalog rows updated per calendar day
    pub async fn word_updates_per_day(&self) -> Result<Vec<DailyCount>, DbErr> {
        self.words_per_day("DATE(updated_at)").await
    }

    async fn words_per_day(&self, bucket: &str) -> Result<Vec<DailyCount>, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::Word::find()
            .select_only()
            .column_as(Expr::cust(bucket.to_string()), "date")
            .column_as(
                Expr::expr(Func::count(Expr::col(entity::word::Column::Id))),
                "count",
            )
            .group_by(Expr::cust(bucket.to_string()))
            .order_by(Expr::cust(bucket.to_string()), Order::Asc)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect())
    }

    /// Published terms with the highest lifetime search counters
    pub async fn top_searched_words(&self, limit: u64) -> Result<Vec<TermSearchCount>, DbErr> {
        let rows: Vec<(String, i32)> = entity::prelude::Word::find()
            .select_only()
            .column(entity::word::Column::Term)
            .column(entity::word::Column::SearchCount)
            .order_by_desc(entity::word::Column::SearchCount)
            .limit(limit)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(term, search_count)| TermSearchCount { term, search_count })
            .collect())
    }

    /// Ledger rows created per calendar day
    pub async fn new_requests_per_day(&self) -> Result<Vec<DailyCount>, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::UserRequest::find()
            .select_only()
            .column_as(Expr::cust("DATE(created_at)"), "date")
            .column_as(
                Expr::expr(Func::count(Expr::col(entity::user_request::Column::Id))),
                "count",
            )
            .group_by(Expr::cust("DATE(created_at)"))
            .order_by(Expr::cust("DATE(created_at)"), Order::Asc)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect())
    }

    /// Mean seconds from submission to approval over resolved entries.
    ///
    /// None when no entry has been resolved yet.
    pub async fn average_resolution_seconds(&self) -> Result<Option<f64>, DbErr> {
        let row: Option<Option<f64>> = entity::prelude::UserRequest::find()
            .select_only()
            .column_as(
                Expr::cust("AVG((julianday(approved_at) - julianday(requested_at)) * 86400.0)"),
                "average_time",
            )
            .filter(entity::user_request::Column::Status.eq("Resolved"))
            .filter(entity::user_request::Column::ApprovedAt.is_not_null())
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(row.flatten())
    }
}
