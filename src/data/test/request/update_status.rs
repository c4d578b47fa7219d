use super::*;

/// Tests the admin status override.
///
/// Arbitrary status text lands on the ledger row without creating any
/// catalog rows; the override deliberately bypasses the approval workflow.
///
/// Expected: Ok with status text replaced and the catalog empty
#[tokio::test]
async fn overrides_status_without_catalog_effect() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictionary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_request_for_word(db, "WASM").await?;

    let updated = RequestRepository::new(db)
        .update_status(created.id, "Under review")
        .await?
        .unwrap();

    assert_eq!(updated.status, "Under review");
    assert!(!updated.approved);
    assert!(updated.updated_at >= created.updated_at);

    // The override never touches the words table
    let word_count = entity::prelude::Word::find().count(db).await?;
    assert_eq!(word_count, 0);

    Ok(())
}

/// Tests overriding an absent ID.
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

    let result = RequestRepository::new(db)
        .update_status(9999, "Resolved")
        .await?;

    assert!(result.is_none());

    Ok(())
}
