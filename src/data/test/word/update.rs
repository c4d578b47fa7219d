use super::*;

/// Tests that a partial update changes only the provided fields.
///
/// Expected: Ok with meaning replaced and the term untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::word::WordFactory::new(db)
        .term("idempotent")
        .meaning("first draft")
        .build()
        .await?;

    let updated = WordRepository::new(db)
        .update(
            created.id,
            UpdateWordParams {
                meaning: Some("safe to retry".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.term, "idempotent");
    assert_eq!(updated.meaning, "safe to retry");
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating an absent ID.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_absent_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Word).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WordRepository::new(db)
        .update(
            9999,
            UpdateWordParams {
                meaning: Some("nobody home".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
