mod consume;

use crate::{data::invitation::InvitationRepository, error::AppError};
use chrono::{Duration, Utc};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};
