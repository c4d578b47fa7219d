use super::*;

/// Tests inserting a new admin account.
///
/// Expected: Ok with the fixed "admin" role attached
#[tokio::test]
async fn creates_admin_with_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AdminRepository::new(db)
        .create(create_params("new@example.com"))
        .await?;

    assert!(account.id > 0);
    assert_eq!(account.email, "new@example.com");
    assert_eq!(account.role, "admin");

    Ok(())
}

/// Tests that the email uniqueness constraint is enforced.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    repo.create(create_params("dup@example.com")).await?;

    let result = repo.create(create_params("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
