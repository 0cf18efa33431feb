use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    #[error("No authentication token provided")]
    MissingToken,

    /// Token is malformed, carries a bad signature or has expired.
    ///
    /// # Fields
    /// - Reason reported by the decoder, logged at debug level only
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    /// No account exists for the email, or the account is deactivated.
    #[error("Invalid credentials or account is inactive")]
    AccountUnavailable,

    /// Password did not match the stored hash.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated user lacks the role a route requires.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the denied operation, logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `AccountUnavailable` / `InvalidCredentials` → 401 Unauthorized with the login message
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            Self::AccountUnavailable => (
                StatusCode::UNAUTHORIZED,
                "Invalid credentials or account is inactive",
            ),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
