use super::*;

/// Tests the create/find/consume invitation lifecycle.
///
/// Expected: Ok, with the token unusable after deletion
#[tokio::test]
async fn creates_finds_and_consumes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Invitation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InvitationRepository::new(db);
    let expires = Utc::now() + Duration::hours(1);

    let created = repo
        .create("invitee@example.com", "deadbeef01", expires)
        .await?;

    let found = repo.find_by_token("deadbeef01").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.email, "invitee@example.com");

    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_token("deadbeef01").await?.is_none());

    Ok(())
}

/// Tests that expiry is purely a timestamp comparison at this layer.
///
/// The repository still returns expired rows; rejecting them is the
/// service's decision.
///
/// Expected: Ok with the expired invitation returned and flagged
#[tokio::test]
async fn returns_expired_invitations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Invitation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invitation::InvitationFactory::new(db)
        .expired()
        .build()
        .await?;

    let found = InvitationRepository::new(db)
        .find_by_token(&created.token)
        .await?
        .unwrap();

    assert!(found.is_expired(Utc::now()));

    Ok(())
}
