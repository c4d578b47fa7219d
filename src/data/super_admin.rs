use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::admin::CreateAdminParams;

pub struct SuperAdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuperAdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a super-admin by login email, entity model included so the
    /// caller can verify the stored password hash
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::super_admin::Model>, DbErr> {
        entity::prelude::SuperAdmin::find()
            .filter(entity::super_admin::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Inserts a new super-admin account
    pub async fn create(
        &self,
        params: CreateAdminParams,
    ) -> Result<entity::super_admin::Model, DbErr> {
        entity::super_admin::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set("superadmin".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Counts all super-admin accounts
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::SuperAdmin::find().count(self.db).await
    }
}
