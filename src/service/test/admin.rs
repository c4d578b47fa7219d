use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{admin::AdminRepository, invitation::InvitationRepository},
    error::AppError,
    model::admin::RegisterAdminParams,
    service::admin::AdminService,
    util::password,
};

fn register_params(token: &str) -> RegisterAdminParams {
    RegisterAdminParams {
        token: token.to_string(),
        name: "Jane Doe".to_string(),
        password: "a-strong-password".to_string(),
    }
}

/// Tests that issuing an invitation persists a redeemable token.
///
/// Expected: Ok with a 40-character token findable by value
#[tokio::test]
async fn invite_persists_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invitation = AdminService::new(db).invite("invitee@example.com").await?;

    assert_eq!(invitation.email, "invitee@example.com");
    assert_eq!(invitation.token.len(), 40);

    let found = InvitationRepository::new(db)
        .find_by_token(&invitation.token)
        .await?;
    assert!(found.is_some());

    Ok(())
}

/// Tests registration via invitation: the admin appears with a verifiable
/// password hash and the invitation is consumed.
///
/// Expected: Ok, then the same token is rejected on replay
#[tokio::test]
async fn register_consumes_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invitation = factory::invitation::InvitationFactory::new(db)
        .email("invitee@example.com")
        .build()
        .await?;

    let service = AdminService::new(db);
    let account = service.register(register_params(&invitation.token)).await?;

    assert_eq!(account.email, "invitee@example.com");
    assert_eq!(account.role, "admin");

    // The stored hash verifies against the chosen password
    let stored = AdminRepository::new(db)
        .find_by_email("invitee@example.com")
        .await?
        .unwrap();
    assert!(password::verify("a-strong-password", &stored.password)?);

    // One-time use: the token is gone
    let replay = service.register(register_params(&invitation.token)).await;
    assert!(matches!(replay, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that an expired invitation cannot be redeemed.
///
/// Expected: Err BadRequest
#[tokio::test]
async fn register_rejects_expired_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invitation = factory::invitation::InvitationFactory::new(db)
        .expired()
        .build()
        .await?;

    let result = AdminService::new(db)
        .register(register_params(&invitation.token))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that an unknown token cannot be redeemed.
///
/// Expected: Err BadRequest
#[tokio::test]
async fn register_rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdminService::new(db)
        .register(register_params("0000000000000000000000000000000000000000"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the duplicate-email conflict on registration.
///
/// Expected: Err Conflict
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::AdminFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;
    let invitation = factory::invitation::InvitationFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = AdminService::new(db)
        .register(register_params(&invitation.token))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that seeding only ever creates one super-admin.
///
/// Expected: first call true, second false, one row total
#[tokio::test]
async fn seed_super_admin_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AdminService::new(db);

    let first = service
        .seed_super_admin("Root", "root@example.com", "seed-password")
        .await?;
    let second = service
        .seed_super_admin("Root", "root@example.com", "seed-password")
        .await?;

    assert!(first);
    assert!(!second);

    let count = crate::data::super_admin::SuperAdminRepository::new(db)
        .count()
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting an absent admin.
///
/// Expected: Err NotFound
#[tokio::test]
async fn delete_admin_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdminService::new(db).delete_admin(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the admin dashboard assembly.
///
/// Expected: Ok with counts and the five most recent requests
#[tokio::test]
async fn dashboard_reports_counts_and_recents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_dictionary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::AdminFactory::new(db)
        .name("On Duty")
        .build()
        .await?;
    factory::create_word(db).await?;
    factory::create_word(db).await?;
    for _ in 0..6 {
        factory::create_request(db).await?;
    }

    let dashboard = AdminService::new(db).admin_dashboard(admin.id).await?;

    assert_eq!(dashboard.admin_name, "On Duty");
    assert_eq!(dashboard.word_count, 2);
    assert_eq!(dashboard.request_count, 6);
    assert_eq!(dashboard.recent_requests.len(), 5);

    Ok(())
}
