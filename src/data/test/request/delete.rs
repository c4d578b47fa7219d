use super::*;

/// Tests deleting an existing ledger entry.
///
/// Expected: Ok(true) and subsequent lookup finds nothing
#[tokio::test]
async fn deletes_existing_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_request(db).await?;

    let repo = RequestRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting an absent ID.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_absent_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!RequestRepository::new(db).delete(9999).await?);

    Ok(())
}
