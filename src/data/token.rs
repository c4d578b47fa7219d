use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct InvalidatedTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvalidatedTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a token to the logout blacklist.
    ///
    /// Logging out twice with the same token is a no-op rather than an error.
    pub async fn invalidate(&self, token: &str) -> Result<(), DbErr> {
        let model = entity::invalidated_token::ActiveModel {
            token: ActiveValue::Set(token.to_string()),
            invalidated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        entity::prelude::InvalidatedToken::insert(model)
            .on_conflict(
                OnConflict::column(entity::invalidated_token::Column::Token)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Whether a token appears on the blacklist
    pub async fn contains(&self, token: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::InvalidatedToken::find()
            .filter(entity::invalidated_token::Column::Token.eq(token))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
