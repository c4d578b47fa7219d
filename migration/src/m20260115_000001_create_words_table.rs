use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No uniqueness constraint on Term: duplicates are tolerated and
        // read paths dedup by recency.
        manager
            .create_table(
                Table::create()
                    .table(Word::Table)
                    .if_not_exists()
                    .col(pk_auto(Word::Id))
                    .col(string(Word::Term))
                    .col(string(Word::Class))
                    .col(text(Word::Meaning))
                    .col(string(Word::Pronunciation))
                    .col(text(Word::History))
                    .col(text(Word::Example))
                    .col(string(Word::Status))
                    .col(integer(Word::SearchCount).default(0))
                    .col(
                        timestamp(Word::AddedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Word::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Word::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Word {
    #[sea_orm(iden = "words")]
    Table,
    Id,
    Term,
    Class,
    Meaning,
    Pronunciation,
    History,
    Example,
    Status,
    SearchCount,
    AddedAt,
    UpdatedAt,
}
