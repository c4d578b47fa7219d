//! Invitation factory for creating test admin invitations.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invitations with customizable fields.
///
/// Invitations default to unexpired (one hour out). Use `expired()` to
/// build one whose deadline has already passed.
pub struct InvitationFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    token: String,
    expires_in: Duration,
}

impl<'a> InvitationFactory<'a> {
    /// Creates a new InvitationFactory with default values.
    ///
    /// Defaults:
    /// - email: `"invitee{id}@example.com"` where id is auto-incremented
    /// - token: unique 40-character hex-looking string
    /// - expires: one hour from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("invitee{}@example.com", id),
            token: format!("{:0>40x}", id),
            expires_in: Duration::hours(1),
        }
    }

    /// Sets the invitee email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the opaque token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Makes the invitation already expired.
    pub fn expired(mut self) -> Self {
        self.expires_in = Duration::hours(-1);
        self
    }

    /// Builds and inserts the invitation entity into the database.
    pub async fn build(self) -> Result<entity::invitation::Model, DbErr> {
        let now = Utc::now();
        entity::invitation::ActiveModel {
            email: ActiveValue::Set(self.email),
            token: ActiveValue::Set(self.token),
            expires: ActiveValue::Set(now + self.expires_in),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unexpired invitation with default values.
pub async fn create_invitation(
    db: &DatabaseConnection,
) -> Result<entity::invitation::Model, DbErr> {
    InvitationFactory::new(db).build().await
}
