use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, SUPERADMIN_ONLY},
    model::{
        admin::{
            AdminAccount, Invitation, InviteAdminParams, RegisterAdminParams, SuperAdminDashboard,
        },
        api::{ErrorDto, MessageDto},
        request::{ApproveRequestParams, WordRequest},
    },
    service::{admin::AdminService, approval::ApprovalService},
    state::AppState,
};

/// Tag for grouping super-admin endpoints in OpenAPI documentation
pub static SUPERADMIN_TAG: &str = "superadmin";

/// View the super-admin dashboard.
#[utoipa::path(
    get,
    path = "/api/superadmin/dashboard",
    tag = SUPERADMIN_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard data", body = SuperAdminDashboard),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Insufficient privileges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(SUPERADMIN_ONLY)
        .await?;

    let dashboard = AdminService::new(&state.db).super_admin_dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// List all admin accounts.
#[utoipa::path(
    get,
    path = "/api/superadmin/admins",
    tag = SUPERADMIN_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All admin accounts", body = Vec<AdminAccount>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Insufficient privileges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admins(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(SUPERADMIN_ONLY)
        .await?;

    let admins = AdminService::new(&state.db).list_admins().await?;

    Ok((StatusCode::OK, Json(admins)))
}

/// Delete an admin account.
#[utoipa::path(
    delete,
    path = "/api/superadmin/admins/{id}",
    tag = SUPERADMIN_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Insufficient privileges", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(SUPERADMIN_ONLY)
        .await?;

    AdminService::new(&state.db).delete_admin(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Admin deleted successfully".to_string(),
        }),
    ))
}

/// Issue a one-time admin invitation.
///
/// Email delivery is an external collaborator; the invitation (token
/// included) is returned to the caller and logged.
#[utoipa::path(
    post,
    path = "/api/superadmin/invitations",
    tag = SUPERADMIN_TAG,
    security(("bearer_auth" = [])),
    request_body = InviteAdminParams,
    responses(
        (status = 200, description = "Invitation issued", body = Invitation),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Insufficient privileges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_invitation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<InviteAdminParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(SUPERADMIN_ONLY)
        .await?;

    let invitation = AdminService::new(&state.db).invite(&payload.email).await?;

    Ok((StatusCode::OK, Json(invitation)))
}

/// Register a new admin using an invitation token.
///
/// Open route: the one-time token is the credential. The invitation must
/// be unexpired and is consumed on success.
///
/// # Returns
/// - `201 Created` - Registered admin account
/// - `400 Bad Request` - Invalid or expired token, or duplicate email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/superadmin/register-admin",
    tag = SUPERADMIN_TAG,
    request_body = RegisterAdminParams,
    responses(
        (status = 201, description = "Admin registered", body = AdminAccount),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_admin(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAdminParams>,
) -> Result<impl IntoResponse, AppError> {
    let account = AdminService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Resolve a pending word request.
///
/// `approved = true` runs the approval workflow: the term is published to
/// the catalog (created or re-activated) and the ledger row is marked
/// resolved with its audit fields, both inside one transaction. A
/// duplicate-term conflict rolls everything back and the request stays
/// pending. `approved = false` rejects the request, deleting its ledger
/// row without touching the catalog. Each request supports exactly one
/// such transition; repeats report not-found.
///
/// # Access Control
/// - `Superadmin` - Only super-admins resolve requests
///
/// # Returns
/// - `201 Created` - Request approved; resolved ledger entry returned
/// - `200 OK` - Request rejected
/// - `400 Bad Request` - Duplicate term conflict
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Insufficient privileges
/// - `404 Not Found` - Unknown or already-resolved request
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/superadmin/user-requests/{request_id}/approve",
    tag = SUPERADMIN_TAG,
    security(("bearer_auth" = [])),
    params(("request_id" = i32, Path, description = "Request ID")),
    request_body = ApproveRequestParams,
    responses(
        (status = 201, description = "Request approved", body = WordRequest),
        (status = 200, description = "Request rejected", body = MessageDto),
        (status = 400, description = "Word already exists in the dictionary", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Insufficient privileges", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(request_id): Path<i32>,
    Json(payload): Json<ApproveRequestParams>,
) -> Result<Response, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(SUPERADMIN_ONLY)
        .await?;

    let service = ApprovalService::new(&state.db);

    if payload.approved {
        let resolved = service
            .approve(request_id, payload, claims.role.as_str())
            .await?;

        Ok((StatusCode::CREATED, Json(resolved)).into_response())
    } else {
        service.reject(request_id).await?;

        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Word request rejected".to_string(),
            }),
        )
            .into_response())
    }
}
