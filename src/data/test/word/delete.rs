use super::*;

/// Tests deleting an existing entry.
///
/// Expected: Ok(true) and the row gone
#[tokio::test]
async fn deletes_existing_word() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_word(db).await?;

    let repo = WordRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting an absent ID.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_absent_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!WordRepository::new(db).delete(9999).await?);

    Ok(())
}
