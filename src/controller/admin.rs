use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, ANY_ACTOR},
    model::{
        admin::AdminDashboard,
        api::{ErrorDto, MessageDto},
        request::{UpdateRequestStatusParams, WordRequest},
    },
    service::{admin::AdminService, request::RequestService},
    state::AppState,
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// View the calling admin's dashboard.
///
/// # Access Control
/// - `Admin` / `Superadmin` - Any authenticated staff member with an admin row
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = ADMIN_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard data", body = AdminDashboard),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    let dashboard = AdminService::new(&state.db)
        .admin_dashboard(claims.sub)
        .await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// List all user requests.
#[utoipa::path(
    get,
    path = "/admin/requests",
    tag = ADMIN_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All user requests", body = Vec<WordRequest>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    let requests = RequestService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Get a single user request by ID.
#[utoipa::path(
    get,
    path = "/admin/requests/{id}",
    tag = ADMIN_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request detail", body = WordRequest),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    let request = RequestService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(request)))
}

/// Overwrite the status text of a user request.
///
/// This is the admin escape hatch around the approval workflow: it edits
/// only the ledger row, never touches the catalog, and does not count as
/// an approve or reject transition.
///
/// # Access Control
/// - `Admin` / `Superadmin` - Any authenticated staff member
#[utoipa::path(
    put,
    path = "/admin/requests/{id}",
    tag = ADMIN_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequestStatusParams,
    responses(
        (status = 200, description = "Updated request", body = WordRequest),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRequestStatusParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    let request = RequestService::new(&state.db)
        .override_status(id, &payload.status)
        .await?;

    Ok((StatusCode::OK, Json(request)))
}

/// Delete a user request.
#[utoipa::path(
    delete,
    path = "/admin/requests/{id}",
    tag = ADMIN_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    RequestService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Request deleted".to_string(),
        }),
    ))
}
