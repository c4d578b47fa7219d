//! Admin factory for creating test administrator accounts.

use crate::factory::helpers::{default_password_hash, hash_password, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test admins with customizable fields.
///
/// The stored password is an argon2 hash; by default it hashes
/// [`crate::factory::helpers::DEFAULT_PASSWORD`] so login tests can present
/// a known plaintext.
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
}

impl<'a> AdminFactory<'a> {
    /// Creates a new AdminFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Admin {id}"` where id is auto-incremented
    /// - email: `"admin{id}@example.com"`
    /// - password: hash of the shared default test password
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Admin {}", id),
            email: format!("admin{}@example.com", id),
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

    /// Builds and inserts the admin entity into the database.
    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set("admin".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}
