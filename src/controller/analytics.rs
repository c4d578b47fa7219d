use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, ANY_ACTOR},
    model::{
        analytics::{RequestAnalyticsReport, UserActivityReport, WordAnalyticsReport},
        api::ErrorDto,
    },
    service::analytics::AnalyticsService,
    state::AppState,
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Visitor activity aggregates from the lookups log.
#[utoipa::path(
    get,
    path = "/api/analytics/user-activity",
    tag = ANALYTICS_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User activity report", body = UserActivityReport),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    let report = AnalyticsService::new(&state.db).user_activity().await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Catalog aggregates: counts by status, per-day activity, top terms.
#[utoipa::path(
    get,
    path = "/api/analytics/words",
    tag = ANALYTICS_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Word analytics report", body = WordAnalyticsReport),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_word_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    let report = AnalyticsService::new(&state.db).word_analytics().await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Ledger aggregates: lifecycle counts and resolution timing.
#[utoipa::path(
    get,
    path = "/api/analytics/requests",
    tag = ANALYTICS_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Request analytics report", body = RequestAnalyticsReport),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    let report = AnalyticsService::new(&state.db).request_analytics().await?;

    Ok((StatusCode::OK, Json(report)))
}
