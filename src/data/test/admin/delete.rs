use super::*;

/// Tests deleting an existing admin.
///
/// Expected: Ok(true) and the account gone
#[tokio::test]
async fn deletes_existing_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_admin(db).await?;

    let repo = AdminRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests deleting an absent ID.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_absent_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Admin).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!AdminRepository::new(db).delete(9999).await?);

    Ok(())
}
