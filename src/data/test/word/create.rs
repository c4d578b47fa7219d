use super::*;

/// Tests creating a catalog entry with defaults.
///
/// Verifies the new entry starts pending with a zero search counter.
///
/// Expected: Ok with pending entry created
#[tokio::test]
async fn creates_word_with_pending_default() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WordRepository::new(db);
    let word = repo.create(create_params("latency")).await?;

    assert!(word.id > 0);
    assert_eq!(word.term, "latency");
    assert_eq!(word.status, WordStatus::Pending);
    assert_eq!(word.search_count, 0);

    // Verify the row exists in the database
    let stored = entity::prelude::Word::find_by_id(word.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().status, "Pending");

    Ok(())
}

/// Tests creating a catalog entry with an explicit status.
///
/// Expected: Ok with the requested status persisted
#[tokio::test]
async fn creates_word_with_explicit_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WordRepository::new(db);
    let mut params = create_params("throughput");
    params.status = Some(WordStatus::Active);

    let word = repo.create(params).await?;

    assert_eq!(word.status, WordStatus::Active);

    Ok(())
}

/// Tests that duplicate terms are tolerated at the storage level.
///
/// The schema carries no uniqueness constraint on the term; read paths are
/// responsible for presenting one row per term.
///
/// Expected: Ok with both rows stored
#[tokio::test]
async fn tolerates_duplicate_terms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WordRepository::new(db);
    repo.create(create_params("cache")).await?;
    repo.create(create_params("cache")).await?;

    let count = entity::prelude::Word::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
