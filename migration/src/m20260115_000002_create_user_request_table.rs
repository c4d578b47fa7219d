use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(UserRequest::Id))
                    .col(string(UserRequest::Word))
                    .col(text(UserRequest::Description))
                    .col(string(UserRequest::RequestedBy))
                    .col(string(UserRequest::Status))
                    .col(boolean(UserRequest::Approved).default(false))
                    .col(string_null(UserRequest::ApprovedBy))
                    .col(timestamp_null(UserRequest::ApprovedAt))
                    .col(
                        timestamp(UserRequest::RequestedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(UserRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(UserRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserRequest {
    #[sea_orm(iden = "user_request")]
    Table,
    Id,
    Word,
    Description,
    RequestedBy,
    Status,
    Approved,
    ApprovedBy,
    ApprovedAt,
    RequestedAt,
    CreatedAt,
    UpdatedAt,
}
