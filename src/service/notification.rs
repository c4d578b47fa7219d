//! Fire-and-forget admin notification sink.
//!
//! Records a message for the admin audience and simulates delivery latency.
//! Callers spawn these methods off the request path; a failure here is
//! logged by the caller and never surfaced to whoever triggered it.

use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::{data::notification::NotificationRepository, error::AppError, model::request::WordRequest};

/// Simulated delivery latency of the admin channel.
const DELIVERY_LATENCY: Duration = Duration::from_millis(250);

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Notifies admins about a new-word submission
    pub async fn notify_new_word_request(
        &self,
        word: &str,
        description: &str,
    ) -> Result<(), AppError> {
        let message = format!("New word request: {} - {}", word, description);

        self.deliver(&message).await
    }

    /// Notifies admins about a change request
    pub async fn notify_change_request(&self, request: &WordRequest) -> Result<(), AppError> {
        let message = format!(
            "Change request for word: {} - {}",
            request.word, request.description
        );

        self.deliver(&message).await
    }

    async fn deliver(&self, message: &str) -> Result<(), AppError> {
        NotificationRepository::new(self.db).create(message).await?;

        tokio::time::sleep(DELIVERY_LATENCY).await;

        tracing::info!("Admins notified: {}", message);

        Ok(())
    }
}
