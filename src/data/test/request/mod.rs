mod create;
mod delete;
mod get_by_id;
mod search;
mod update_status;

use crate::{
    data::request::RequestRepository,
    error::AppError,
    model::request::{CreateRequestParams, RequestStatus},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
