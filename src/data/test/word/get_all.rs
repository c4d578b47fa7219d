use super::*;
use chrono::{Duration, Utc};

/// Tests that listing dedups duplicate terms with the newest row winning.
///
/// Two rows share a term but differ in meaning and publication time; only
/// the more recently added row may surface.
///
/// Expected: Ok with one row per term, newest meaning visible
#[tokio::test]
async fn dedups_by_term_newest_wins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::word::WordFactory::new(db)
        .term("cache")
        .meaning("stale meaning")
        .added_at(now - Duration::minutes(10))
        .build()
        .await?;
    factory::word::WordFactory::new(db)
        .term("cache")
        .meaning("fresh meaning")
        .added_at(now)
        .build()
        .await?;

    let words = WordRepository::new(db).get_all().await?;

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].term, "cache");
    assert_eq!(words[0].meaning, "fresh meaning");

    Ok(())
}

/// Tests that distinct terms are all listed, sorted by term.
///
/// Expected: Ok with every term present exactly once
#[tokio::test]
async fn lists_distinct_terms_sorted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_word_with_term(db, "mutex").await?;
    factory::create_word_with_term(db, "atomic").await?;
    factory::create_word_with_term(db, "latch").await?;

    let words = WordRepository::new(db).get_all().await?;

    let terms: Vec<_> = words.iter().map(|w| w.term.as_str()).collect();
    assert_eq!(terms, vec!["atomic", "latch", "mutex"]);

    Ok(())
}
