use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header was presented on a guarded route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The presented token was malformed, carried a bad signature, or expired.
    ///
    /// All decode failures collapse into this variant so the response gives no
    /// hint which check failed. Results in a 401 Unauthorized response.
    #[error("Token failed verification")]
    InvalidToken,

    /// The token appears on the logout blacklist.
    ///
    /// Rejected even while cryptographically valid and unexpired.
    /// Results in a 401 Unauthorized response.
    #[error("Token has been invalidated")]
    TokenInvalidated,

    /// Login failed: unknown email or wrong password.
    ///
    /// Both causes share this variant so the response carries no
    /// user-enumeration signal. Results in a 401 Unauthorized response.
    #[error("Invalid credentials presented")]
    InvalidCredentials,

    /// A verified actor lacks the role required by the route.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Actor {0} lacks the role required for this operation")]
    AccessDenied(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// All token and credential failures map to 401 with deliberately uniform
/// client-facing messages; only a role mismatch is distinguishable as 403.
/// Full variants are logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth failure: {}", self);

        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Token is missing".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid token".to_string(),
                }),
            )
                .into_response(),
            Self::TokenInvalidated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Token has been invalidated".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Insufficient privileges".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
