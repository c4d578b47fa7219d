use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        request::{ChangeRequestParams, CreateRequestParams, WordRequest},
    },
    service::{notification::NotificationService, request::RequestService},
    state::AppState,
};

/// Tag for grouping request-submission endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "requests";

/// Submit a request for a new word.
///
/// Open to unauthenticated users. The ledger entry always starts pending
/// and unapproved regardless of any caller-supplied fields, and admins are
/// notified on a fire-and-forget channel that never fails the submission.
///
/// # Returns
/// - `201 Created` - Recorded ledger entry
/// - `400 Bad Request` - Missing word or description
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/request",
    tag = REQUEST_TAG,
    request_body = CreateRequestParams,
    responses(
        (status = 201, description = "Request created", body = WordRequest),
        (status = 400, description = "Missing word or description", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequestParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = RequestService::new(&state.db).submit(payload).await?;

    // Notify failure must never surface to the submitter.
    let db = state.db.clone();
    let word = request.word.clone();
    let description = request.description.clone();
    tokio::spawn(async move {
        if let Err(e) = NotificationService::new(&db)
            .notify_new_word_request(&word, &description)
            .await
        {
            tracing::warn!("Failed to notify admins about new word request: {}", e);
        }
    });

    Ok((StatusCode::CREATED, Json(request)))
}

/// Submit a change request against an existing word.
///
/// # Returns
/// - `201 Created` - Recorded ledger entry
/// - `400 Bad Request` - Missing word or section
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/request/change",
    tag = REQUEST_TAG,
    request_body = ChangeRequestParams,
    responses(
        (status = 201, description = "Change request created", body = WordRequest),
        (status = 400, description = "Missing word or section", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_change_request(
    State(state): State<AppState>,
    Json(payload): Json<ChangeRequestParams>,
) -> Result<impl IntoResponse, AppError> {
    let request = RequestService::new(&state.db).submit_change(payload).await?;

    let db = state.db.clone();
    let notified = request.clone();
    tokio::spawn(async move {
        if let Err(e) = NotificationService::new(&db)
            .notify_change_request(&notified)
            .await
        {
            tracing::warn!("Failed to notify admins about change request: {}", e);
        }
    });

    Ok((StatusCode::CREATED, Json(request)))
}
