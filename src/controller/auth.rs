use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, ANY_ACTOR},
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginParams, TokenResponse},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as an admin or super-admin.
///
/// Credential stores are consulted super-admins first. Unknown email and
/// wrong password produce identical responses.
///
/// # Returns
/// - `200 OK` - Signed bearer token
/// - `401 Unauthorized` - Invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginParams,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let token = service.login(&payload.email, &payload.password).await?;

    Ok((StatusCode::OK, Json(TokenResponse { token })))
}

/// Log out by invalidating the presented bearer token.
///
/// The token lands on the blacklist and is rejected from then on, even
/// while cryptographically valid.
///
/// # Returns
/// - `200 OK` - Token invalidated
/// - `401 Unauthorized` - Missing, malformed, or already invalidated token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully logged out", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let _ = guard.require(ANY_ACTOR).await?;

    let token = guard.token()?;
    AuthService::new(&state.db, &state.jwt).logout(token).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    ))
}
