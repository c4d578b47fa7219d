use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvalidatedToken::Table)
                    .if_not_exists()
                    .col(pk_auto(InvalidatedToken::Id))
                    .col(string_uniq(InvalidatedToken::Token))
                    .col(
                        timestamp(InvalidatedToken::InvalidatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvalidatedToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InvalidatedToken {
    #[sea_orm(iden = "invalidated_tokens")]
    Table,
    Id,
    Token,
    InvalidatedAt,
}
