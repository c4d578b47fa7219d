use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct LookupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LookupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a search to the audit log, hit or miss
    pub async fn log(&self, term: &str, ip_address: &str) -> Result<entity::lookup::Model, DbErr> {
        entity::lookup::ActiveModel {
            term: ActiveValue::Set(term.to_string()),
            ip_address: ActiveValue::Set(ip_address.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
