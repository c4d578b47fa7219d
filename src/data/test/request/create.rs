use super::*;

/// Tests that a submission is always initialized pending and unapproved.
///
/// Expected: Ok with Pending status, approved false, no audit fields
#[tokio::test]
async fn forces_pending_unapproved() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = RequestRepository::new(db)
        .create(CreateRequestParams {
            word: "API".to_string(),
            description: "add def".to_string(),
            requested_by: None,
        })
        .await?;

    assert_eq!(request.status, RequestStatus::Pending.as_str());
    assert!(!request.approved);
    assert!(request.approved_by.is_none());
    assert!(request.approved_at.is_none());
    assert_eq!(request.requested_by, "Anonymous");

    Ok(())
}

/// Tests that an explicit submitter identifier is kept.
///
/// Expected: Ok with requested_by persisted
#[tokio::test]
async fn keeps_submitter_identifier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(UserRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = RequestRepository::new(db)
        .create(CreateRequestParams {
            word: "gRPC".to_string(),
            description: "please add".to_string(),
            requested_by: Some("dev@example.com".to_string()),
        })
        .await?;

    assert_eq!(request.requested_by, "dev@example.com");

    Ok(())
}
