use sea_orm::entity::prelude::*;

/// User-submitted word request. `word` is free text with no referential
/// integrity to the words table; reconciliation happens at approval time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub word: String,
    pub description: String,
    pub requested_by: String,
    pub status: String,
    pub approved: bool,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTimeUtc>,
    pub requested_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
