use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::admin::{AdminAccount, CreateAdminParams};

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an admin by login email, entity model included so the caller
    /// can verify the stored password hash
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds an admin by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find_by_id(id).one(self.db).await
    }

    /// Gets all admin accounts
    pub async fn get_all(&self) -> Result<Vec<AdminAccount>, DbErr> {
        let models = entity::prelude::Admin::find()
            .order_by_asc(entity::admin::Column::Name)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(AdminAccount::from_entity).collect())
    }

    /// Inserts a new admin account
    pub async fn create(&self, params: CreateAdminParams) -> Result<AdminAccount, DbErr> {
        let model = entity::admin::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set("admin".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AdminAccount::from_entity(model))
    }

    /// Deletes an admin account, returning whether a row existed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Admin::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts all admin accounts
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Admin::find().count(self.db).await
    }
}
