mod contains;

use crate::{data::token::InvalidatedTokenRepository, error::AppError};
use entity::prelude::*;
use test_utils::builder::TestBuilder;
