mod create;
mod delete;
mod find_by_email;

use crate::{data::admin::AdminRepository, error::AppError, model::admin::CreateAdminParams};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

fn create_params(email: &str) -> CreateAdminParams {
    CreateAdminParams {
        name: "New Admin".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$fakesalt$fakehash".to_string(),
    }
}
