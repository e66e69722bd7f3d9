use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the account lifecycle: registration, login, password changes and tokens.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    /// Another account already uses the requested email address.
    #[error("Email is already in use")]
    EmailAlreadyInUse,

    /// Unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Correct credentials for an account whose email has not been verified.
    #[error("Account email has not been verified")]
    AccountNotVerified,

    /// Password change attempted with a missing or wrong current password.
    #[error("Current password is incorrect")]
    IncorrectPassword,

    /// Reset token unknown, already consumed or past its expiry.
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    /// Profile update with no field to change.
    #[error("No data provided")]
    NoDataProvided,
}

/// Converts account errors into HTTP responses.
///
/// - `EmailAlreadyInUse` → 409 Conflict
/// - `InvalidCredentials` / `AccountNotVerified` → 401 Unauthorized
/// - `IncorrectPassword` → 403 Forbidden
/// - `InvalidOrExpiredToken` / `NoDataProvided` → 400 Bad Request
impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EmailAlreadyInUse => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::AccountNotVerified => StatusCode::UNAUTHORIZED,
            Self::IncorrectPassword => StatusCode::FORBIDDEN,
            Self::InvalidOrExpiredToken | Self::NoDataProvided => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("Account request rejected: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
