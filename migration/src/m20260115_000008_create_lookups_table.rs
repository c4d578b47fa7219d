use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lookup::Table)
                    .if_not_exists()
                    .col(pk_auto(Lookup::Id))
                    .col(string(Lookup::Term))
                    .col(string(Lookup::IpAddress))
                    .col(
                        timestamp(Lookup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lookup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lookup {
    #[sea_orm(iden = "lookups")]
    Table,
    Id,
    Term,
    IpAddress,
    CreatedAt,
}
