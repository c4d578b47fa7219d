//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned cheaply for
//! each request handler through Axum's state extraction: the database
//! connection is a pooled handle, the JWT keys are small reference types,
//! and the word-of-the-day cache is reference-counted.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{model::word::Word, util::jwt::JwtKeys};

/// Process-wide cache holding the current word of the day.
///
/// Single writer (the daily refresh job), many readers. The value is
/// advisory and non-authoritative: it is `None` until the job first fires,
/// and readers must treat that as a miss.
pub type WordOfDayCache = Arc<RwLock<Option<Word>>>;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing and verification keys for bearer tokens.
    pub jwt: JwtKeys,

    /// Advisory word-of-the-day cache refreshed by the daily scheduler.
    pub word_of_day: WordOfDayCache,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, jwt: JwtKeys, word_of_day: WordOfDayCache) -> Self {
        Self {
            db,
            jwt,
            word_of_day,
        }
    }
}
