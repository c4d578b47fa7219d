use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::admin::Invitation;

pub struct InvitationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a freshly issued invitation
    pub async fn create(
        &self,
        email: &str,
        token: &str,
        expires: DateTime<Utc>,
    ) -> Result<Invitation, DbErr> {
        let model = entity::invitation::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            token: ActiveValue::Set(token.to_string()),
            expires: ActiveValue::Set(expires),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Invitation::from_entity(model))
    }

    /// Looks an invitation up by its opaque token
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>, DbErr> {
        let model = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(model.map(Invitation::from_entity))
    }

    /// Consumes (deletes) an invitation, returning whether a row existed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Invitation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
