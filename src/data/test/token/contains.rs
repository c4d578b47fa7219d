use super::*;

/// Tests blacklist membership after invalidation.
///
/// Expected: Ok, unknown tokens absent, invalidated tokens present
#[tokio::test]
async fn tracks_invalidated_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(InvalidatedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InvalidatedTokenRepository::new(db);

    assert!(!repo.contains("some.jwt.token").await?);

    repo.invalidate("some.jwt.token").await?;

    assert!(repo.contains("some.jwt.token").await?);
    assert!(!repo.contains("another.jwt.token").await?);

    Ok(())
}

/// Tests that invalidating the same token twice is a no-op.
///
/// Expected: Ok both times
#[tokio::test]
async fn double_invalidation_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(InvalidatedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InvalidatedTokenRepository::new(db);

    repo.invalidate("some.jwt.token").await?;
    repo.invalidate("some.jwt.token").await?;

    assert!(repo.contains("some.jwt.token").await?);

    Ok(())
}
