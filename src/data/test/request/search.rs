use super::*;

/// Tests the ledger-side search fallback.
///
/// Expected: Ok with word and description of the pending submission
#[tokio::test]
async fn finds_pending_submission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::request::RequestFactory::new(db)
        .word("GraphQL")
        .description("query language for APIs")
        .build()
        .await?;

    let matches = RequestRepository::new(db).search("graph").await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].word, "GraphQL");
    assert_eq!(matches[0].description, "query language for APIs");

    Ok(())
}

/// Tests a miss in the ledger.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn returns_empty_for_miss() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_request_for_word(db, "GraphQL").await?;

    let matches = RequestRepository::new(db).search("zookeeper").await?;

    assert!(matches.is_empty());

    Ok(())
}
