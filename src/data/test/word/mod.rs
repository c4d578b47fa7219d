mod create;
mod delete;
mod get_all;
mod get_by_id;
mod search;
mod update;

use crate::{
    data::word::WordRepository,
    error::AppError,
    model::word::{CreateWordParams, UpdateWordParams, WordStatus},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn create_params(term: &str) -> CreateWordParams {
    CreateWordParams {
        term: term.to_string(),
        class: "noun".to_string(),
        meaning: format!("Meaning of {}", term),
        pronunciation: String::new(),
        history: String::new(),
        example: String::new(),
        status: None,
    }
}
