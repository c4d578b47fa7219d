use sea_orm::entity::prelude::*;

/// Dictionary entry. `term` carries no uniqueness constraint: historical
/// duplicates are tolerated and read paths keep the newest row per term.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "words")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub term: String,
    pub class: String,
    pub meaning: String,
    pub pronunciation: String,
    pub history: String,
    pub example: String,
    pub status: String,
    pub search_count: i32,
    pub added_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
