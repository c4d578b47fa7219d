//! Word factory for creating test dictionary entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test words with customizable fields.
///
/// Provides a builder pattern for creating word entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::word::WordFactory;
///
/// let word = WordFactory::new(&db)
///     .term("API")
///     .status("Active")
///     .build()
///     .await?;
/// ```
pub struct WordFactory<'a> {
    db: &'a DatabaseConnection,
    term: String,
    class: String,
    meaning: String,
    pronunciation: String,
    history: String,
    example: String,
    status: String,
    search_count: i32,
    added_at: DateTime<Utc>,
}

impl<'a> WordFactory<'a> {
    /// Creates a new WordFactory with default values.
    ///
    /// Defaults:
    /// - term: `"term{id}"` where id is auto-incremented
    /// - class: `"noun"`
    /// - status: `"Active"`
    /// - search_count: `0`
    /// - added_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            term: format!("term{}", id),
            class: "noun".to_string(),
            meaning: format!("Meaning of term {}", id),
            pronunciation: String::new(),
            history: String::new(),
            example: String::new(),
            status: "Active".to_string(),
            search_count: 0,
            added_at: Utc::now(),
        }
    }

    /// Sets the display term.
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Sets the word class (noun, verb, ...).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Sets the meaning text.
    pub fn meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = meaning.into();
        self
    }

    /// Sets the status literal (`"Pending"` or `"Active"`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the search counter.
    pub fn search_count(mut self, search_count: i32) -> Self {
        self.search_count = search_count;
        self
    }

    /// Sets the publication timestamp. Useful for dedup-by-recency tests.
    pub fn added_at(mut self, added_at: DateTime<Utc>) -> Self {
        self.added_at = added_at;
        self
    }

    /// Builds and inserts the word entity into the database.
    pub async fn build(self) -> Result<entity::word::Model, DbErr> {
        entity::word::ActiveModel {
            term: ActiveValue::Set(self.term),
            class: ActiveValue::Set(self.class),
            meaning: ActiveValue::Set(self.meaning),
            pronunciation: ActiveValue::Set(self.pronunciation),
            history: ActiveValue::Set(self.history),
            example: ActiveValue::Set(self.example),
            status: ActiveValue::Set(self.status),
            search_count: ActiveValue::Set(self.search_count),
            added_at: ActiveValue::Set(self.added_at),
            updated_at: ActiveValue::Set(self.added_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a word with default values.
///
/// Shorthand for `WordFactory::new(db).build().await`.
pub async fn create_word(db: &DatabaseConnection) -> Result<entity::word::Model, DbErr> {
    WordFactory::new(db).build().await
}

/// Creates a word with a specific term.
///
/// Shorthand for `WordFactory::new(db).term(term).build().await`.
pub async fn create_word_with_term(
    db: &DatabaseConnection,
    term: impl Into<String>,
) -> Result<entity::word::Model, DbErr> {
    WordFactory::new(db).term(term).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_word_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Word).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let word = create_word(db).await?;

        assert!(!word.term.is_empty());
        assert_eq!(word.status, "Active");
        assert_eq!(word.search_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_words() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Word).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_word(db).await?;
        let second = create_word(db).await?;

        assert_ne!(first.term, second.term);
        assert_ne!(first.id, second.id);

        Ok(())
    }

    #[tokio::test]
    async fn creates_word_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Word).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let word = WordFactory::new(db)
            .term("API")
            .class("acronym")
            .status("Pending")
            .search_count(7)
            .build()
            .await?;

        assert_eq!(word.term, "API");
        assert_eq!(word.class, "acronym");
        assert_eq!(word.status, "Pending");
        assert_eq!(word.search_count, 7);

        Ok(())
    }
}
