use super::*;

/// Tests fetching an existing ledger entry by ID.
///
/// Expected: Ok with the entry returned
#[tokio::test]
async fn gets_existing_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_request_for_word(db, "WASM").await?;

    let found = RequestRepository::new(db).get_by_id(created.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().word, "WASM");

    Ok(())
}

/// Tests fetching an absent ID.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_absent_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = RequestRepository::new(db).get_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
