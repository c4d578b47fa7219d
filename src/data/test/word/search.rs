use super::*;
use chrono::{Duration, Utc};
use sea_orm::ColumnTrait;
use sea_orm::QueryFilter;

/// Tests case-insensitive substring matching.
///
/// Expected: Ok with the entry found under a differently-cased fragment
#[tokio::test]
async fn matches_case_insensitive_substring() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_word_with_term(db, "Kubernetes").await?;

    let repo = WordRepository::new(db);
    let matches = repo.search("BERNE").await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].term, "Kubernetes");

    Ok(())
}

/// Tests that a non-matching query returns an empty set.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn returns_empty_for_miss() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_word_with_term(db, "Kubernetes").await?;

    let matches = WordRepository::new(db).search("zookeeper").await?;

    assert!(matches.is_empty());

    Ok(())
}

/// Tests that search results dedup duplicate terms, newest winning.
///
/// Expected: Ok with one row for the duplicated term
#[tokio::test]
async fn search_dedups_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::word::WordFactory::new(db)
        .term("shard")
        .meaning("old")
        .added_at(now - Duration::minutes(10))
        .build()
        .await?;
    factory::word::WordFactory::new(db)
        .term("shard")
        .meaning("new")
        .added_at(now)
        .build()
        .await?;

    let matches = WordRepository::new(db).search("shard").await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].meaning, "new");

    Ok(())
}

/// Tests that the counter bump touches every matching row once.
///
/// Duplicated terms each get incremented, matching the read-time-dedup
/// data model, and unrelated rows stay untouched.
///
/// Expected: Ok with two rows touched
#[tokio::test]
async fn increments_every_matching_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_word_with_term(db, "shard").await?;
    factory::create_word_with_term(db, "sharding").await?;
    factory::create_word_with_term(db, "mutex").await?;

    let touched = WordRepository::new(db).increment_search_count("shard").await?;
    assert_eq!(touched, 2);

    let counts: Vec<(String, i32)> = entity::prelude::Word::find()
        .all(db)
        .await?
        .into_iter()
        .map(|w| (w.term, w.search_count))
        .collect();

    for (term, count) in counts {
        if term.starts_with("shard") {
            assert_eq!(count, 1, "term {} should have been counted", term);
        } else {
            assert_eq!(count, 0, "term {} should be untouched", term);
        }
    }

    Ok(())
}

/// Tests that a miss increments nothing.
///
/// Expected: Ok with zero rows touched
#[tokio::test]
async fn increments_nothing_on_miss() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let word = factory::create_word_with_term(db, "mutex").await?;

    let touched = WordRepository::new(db)
        .increment_search_count("zookeeper")
        .await?;
    assert_eq!(touched, 0);

    let stored = entity::prelude::Word::find()
        .filter(entity::word::Column::Id.eq(word.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.search_count, 0);

    Ok(())
}
