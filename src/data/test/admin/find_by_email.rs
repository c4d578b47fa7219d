use super::*;

/// Tests the credential lookup by email.
///
/// The entity model comes back whole so the caller can verify the stored
/// password hash.
///
/// Expected: Ok with the stored hash included
#[tokio::test]
async fn finds_admin_with_hash() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::admin::AdminFactory::new(db)
        .email("login@example.com")
        .build()
        .await?;

    let found = AdminRepository::new(db)
        .find_by_email("login@example.com")
        .await?
        .unwrap();

    assert_eq!(found.id, created.id);
    assert!(found.password.starts_with("$argon2"));

    Ok(())
}

/// Tests an unknown email.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = AdminRepository::new(db)
        .find_by_email("ghost@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
