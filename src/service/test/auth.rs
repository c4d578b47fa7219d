use test_utils::{builder::TestBuilder, factory, factory::helpers::DEFAULT_PASSWORD};

use crate::{
    data::token::InvalidatedTokenRepository,
    error::{auth::AuthError, AppError},
    model::auth::Role,
    service::auth::AuthService,
    util::jwt::JwtKeys,
};

fn test_keys() -> JwtKeys {
    JwtKeys::new("test-secret-that-is-at-least-32-characters-long")
}

/// Tests a successful super-admin login.
///
/// Expected: Ok with a token carrying the superadmin role
#[tokio::test]
async fn login_issues_super_admin_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = test_keys();

    let account = factory::super_admin::SuperAdminFactory::new(db)
        .email("root@example.com")
        .build()
        .await?;

    let token = AuthService::new(db, &keys)
        .login("root@example.com", DEFAULT_PASSWORD)
        .await?;

    let claims = keys.verify(&token).unwrap();
    assert_eq!(claims.sub, account.id);
    assert_eq!(claims.role, Role::Superadmin);

    Ok(())
}

/// Tests a successful admin login.
///
/// Expected: Ok with a token carrying the admin role
#[tokio::test]
async fn login_issues_admin_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = test_keys();

    let account = factory::admin::AdminFactory::new(db)
        .email("staff@example.com")
        .build()
        .await?;

    let token = AuthService::new(db, &keys)
        .login("staff@example.com", DEFAULT_PASSWORD)
        .await?;

    let claims = keys.verify(&token).unwrap();
    assert_eq!(claims.sub, account.id);
    assert_eq!(claims.role, Role::Admin);

    Ok(())
}

/// Tests that a wrong password and an unknown email fail identically.
///
/// Both must produce the same InvalidCredentials variant so the response
/// carries no user-enumeration signal.
///
/// Expected: Err InvalidCredentials in both cases
#[tokio::test]
async fn login_failures_are_uniform() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = test_keys();

    factory::admin::AdminFactory::new(db)
        .email("staff@example.com")
        .build()
        .await?;

    let service = AuthService::new(db, &keys);

    let wrong_password = service.login("staff@example.com", "wrong-password").await;
    let unknown_email = service.login("ghost@example.com", DEFAULT_PASSWORD).await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests the fixed store priority: super-admins are consulted first, and a
/// matching email there means the admins table is never reached.
///
/// Expected: super-admin password logs in as superadmin; the admin
/// password for the same email fails
#[tokio::test]
async fn super_admin_store_has_priority() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = test_keys();

    factory::super_admin::SuperAdminFactory::new(db)
        .email("shared@example.com")
        .password("super-secret-1")
        .build()
        .await?;
    factory::admin::AdminFactory::new(db)
        .email("shared@example.com")
        .password("admin-secret-2")
        .build()
        .await?;

    let service = AuthService::new(db, &keys);

    let token = service.login("shared@example.com", "super-secret-1").await?;
    assert_eq!(keys.verify(&token).unwrap().role, Role::Superadmin);

    let admin_attempt = service.login("shared@example.com", "admin-secret-2").await;
    assert!(matches!(
        admin_attempt,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that logout lands the token on the blacklist.
///
/// Expected: Ok with the exact token recorded
#[tokio::test]
async fn logout_blacklists_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = test_keys();

    factory::super_admin::SuperAdminFactory::new(db)
        .email("root@example.com")
        .build()
        .await?;

    let service = AuthService::new(db, &keys);
    let token = service.login("root@example.com", DEFAULT_PASSWORD).await?;

    service.logout(&token).await?;

    assert!(InvalidatedTokenRepository::new(db).contains(&token).await?);

    Ok(())
}
