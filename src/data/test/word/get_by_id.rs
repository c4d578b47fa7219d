use super::*;

/// Tests fetching an existing entry by ID.
///
/// Expected: Ok with the entry returned
#[tokio::test]
async fn gets_existing_word() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_word_with_term(db, "latency").await?;

    let found = WordRepository::new(db).get_by_id(created.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().term, "latency");

    Ok(())
}

/// Tests fetching an absent ID.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_absent_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = WordRepository::new(db).get_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
