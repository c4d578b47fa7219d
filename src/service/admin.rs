//! Administrator lifecycle and dashboards.
//!
//! Invitations gate admin registration: a super-admin issues a one-time
//! token, the invitee redeems it with a name and password, and the token is
//! consumed on success. Invitation delivery (email) is out of band; the
//! issued token is returned to the caller and logged.

use chrono::{Duration, Utc};
use rand::RngCore;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    data::{
        admin::AdminRepository, invitation::InvitationRepository, request::RequestRepository,
        super_admin::SuperAdminRepository, word::WordRepository,
    },
    error::AppError,
    model::admin::{
        AdminAccount, AdminDashboard, CreateAdminParams, Invitation, RegisterAdminParams,
        SuperAdminDashboard,
    },
    util::password,
};

/// How long an invitation stays redeemable.
const INVITATION_TTL_HOURS: i64 = 1;

/// How many recent submissions the admin dashboard shows.
const DASHBOARD_RECENT_REQUESTS: u64 = 5;

const INVALID_INVITATION: &str = "Invalid or expired token";

/// Opaque random invitation credential, 20 bytes hex-encoded.
fn generate_token() -> String {
    let mut bytes = [0u8; 20];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn map_email_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("An admin with this email already exists".to_string())
        }
        _ => AppError::DbErr(err),
    }
}

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a one-time admin invitation for the given email.
    pub async fn invite(&self, email: &str) -> Result<Invitation, AppError> {
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }

        let token = generate_token();
        let expires = Utc::now() + Duration::hours(INVITATION_TTL_HOURS);

        let invitation = InvitationRepository::new(self.db)
            .create(email, &token, expires)
            .await?;

        tracing::info!("Invitation issued for {}; delivery handled out of band", email);

        Ok(invitation)
    }

    /// Redeems an invitation and registers the new admin.
    ///
    /// The invitation must exist and be unexpired; it is consumed on
    /// success so the token cannot be replayed.
    pub async fn register(&self, params: RegisterAdminParams) -> Result<AdminAccount, AppError> {
        let invitations = InvitationRepository::new(self.db);

        let Some(invitation) = invitations.find_by_token(&params.token).await? else {
            return Err(AppError::BadRequest(INVALID_INVITATION.to_string()));
        };
        if invitation.is_expired(Utc::now()) {
            return Err(AppError::BadRequest(INVALID_INVITATION.to_string()));
        }

        let password_hash = password::hash(&params.password)?;

        let account = AdminRepository::new(self.db)
            .create(CreateAdminParams {
                name: params.name,
                email: invitation.email.clone(),
                password_hash,
            })
            .await
            .map_err(map_email_conflict)?;

        invitations.delete(invitation.id).await?;

        tracing::info!("Admin {} registered via invitation", account.email);

        Ok(account)
    }

    /// Lists all admin accounts
    pub async fn list_admins(&self) -> Result<Vec<AdminAccount>, AppError> {
        let repo = AdminRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Deletes an admin account
    pub async fn delete_admin(&self, id: i32) -> Result<(), AppError> {
        let repo = AdminRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Admin not found".to_string()));
        }

        Ok(())
    }

    /// Builds the dashboard for an individual admin
    pub async fn admin_dashboard(&self, admin_id: i32) -> Result<AdminDashboard, AppError> {
        let Some(admin) = AdminRepository::new(self.db).find_by_id(admin_id).await? else {
            return Err(AppError::NotFound("Admin not found".to_string()));
        };

        let requests = RequestRepository::new(self.db);

        Ok(AdminDashboard {
            admin_name: admin.name,
            word_count: WordRepository::new(self.db).count().await?,
            request_count: requests.count().await?,
            recent_requests: requests.get_recent(DASHBOARD_RECENT_REQUESTS).await?,
        })
    }

    /// Builds the super-admin dashboard
    pub async fn super_admin_dashboard(&self) -> Result<SuperAdminDashboard, AppError> {
        Ok(SuperAdminDashboard {
            admin_count: AdminRepository::new(self.db).count().await?,
            word_count: WordRepository::new(self.db).count().await?,
            request_count: RequestRepository::new(self.db).count().await?,
        })
    }

    /// Seeds the initial super-admin account when the table is empty.
    ///
    /// Idempotent: a populated table short-circuits, so restarts never
    /// duplicate the account.
    pub async fn seed_super_admin(
        &self,
        name: &str,
        email: &str,
        plaintext: &str,
    ) -> Result<bool, AppError> {
        let repo = SuperAdminRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(false);
        }

        let password_hash = password::hash(plaintext)?;

        repo.create(CreateAdminParams {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await?;

        tracing::info!("Seeded super-admin account for {}", email);

        Ok(true)
    }
}
