use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SuperAdmin::Table)
                    .if_not_exists()
                    .col(pk_auto(SuperAdmin::Id))
                    .col(string(SuperAdmin::Name))
                    .col(string_uniq(SuperAdmin::Email))
                    .col(string(SuperAdmin::Password))
                    .col(string(SuperAdmin::Role))
                    .col(
                        timestamp(SuperAdmin::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SuperAdmin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SuperAdmin {
    #[sea_orm(iden = "superadmins")]
    Table,
    Id,
    Name,
    Email,
    Password,
    Role,
    CreatedAt,
}
