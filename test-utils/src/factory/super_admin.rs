//! Super-admin factory for creating test super-administrator accounts.

use crate::factory::helpers::{default_password_hash, hash_password, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test super-admins with customizable fields.
pub struct SuperAdminFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
}

impl<'a> SuperAdminFactory<'a> {
    /// Creates a new SuperAdminFactory with default values.
    ///
    /// Defaults:
    /// - name: `"SuperAdmin {id}"` where id is auto-incremented
    /// - email: `"superadmin{id}@example.com"`
    /// - password: hash of the shared default test password
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("SuperAdmin {}", id),
            email: format!("superadmin{}@example.com", id),
            password_hash: default_password_hash().to_string(),
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the login email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets a custom plaintext password, hashed on build.
    pub fn password(mut self, password: &str) -> Self {
        self.password_hash = hash_password(password);
        self
    }

    /// Builds and inserts the super-admin entity into the database.
    pub async fn build(self) -> Result<entity::super_admin::Model, DbErr> {
        entity::super_admin::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set("superadmin".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a super-admin with default values.
pub async fn create_super_admin(
    db: &DatabaseConnection,
) -> Result<entity::super_admin::Model, DbErr> {
    SuperAdminFactory::new(db).build().await
}
