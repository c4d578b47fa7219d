pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_words_table;
mod m20260115_000002_create_user_request_table;
mod m20260115_000003_create_admins_table;
mod m20260115_000004_create_superadmins_table;
mod m20260115_000005_create_invitations_table;
mod m20260115_000006_create_invalidated_tokens_table;
mod m20260115_000007_create_notifications_table;
mod m20260115_000008_create_lookups_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_words_table::Migration),
            Box::new(m20260115_000002_create_user_request_table::Migration),
            Box::new(m20260115_000003_create_admins_table::Migration),
            Box::new(m20260115_000004_create_superadmins_table::Migration),
            Box::new(m20260115_000005_create_invitations_table::Migration),
            Box::new(m20260115_000006_create_invalidated_tokens_table::Migration),
            Box::new(m20260115_000007_create_notifications_table::Migration),
            Box::new(m20260115_000008_create_lookups_table::Migration),
        ]
    }
}
