use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, format or expiry checks.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token references a user that no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotFound(i32),

    /// Email or password did not match.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// User is authenticated but their role is not allowed for this operation.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Driver profile is still awaiting admin approval.
    #[error("Driver {0} is awaiting approval")]
    DriverPending(i32),

    /// Driver profile was rejected by an admin.
    #[error("Driver {0} was rejected")]
    DriverRejected(i32),

    /// No matching one-time passcode.
    #[error("Invalid OTP")]
    InvalidOtp,

    /// One-time passcode matched but has expired.
    #[error("OTP expired")]
    OtpExpired,

    /// Registration attempted with an email that already has an account.
    #[error("Email {0} is already registered")]
    EmailTaken(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotFound` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `DriverPending` / `DriverRejected` → 403 Forbidden
/// - `InvalidOtp` / `OtpExpired` → 400 Bad Request
/// - `EmailTaken` → 409 Conflict
///
/// Token and access failures are logged at debug level while the client only sees a
/// generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotFound(_) => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    "You don't have permission to perform this action",
                )
            }
            Self::DriverPending(_) => (
                StatusCode::FORBIDDEN,
                "Your driver account is awaiting admin approval",
            ),
            Self::DriverRejected(_) => (
                StatusCode::FORBIDDEN,
                "Your driver account application was rejected",
            ),
            Self::InvalidOtp => (StatusCode::BAD_REQUEST, "Invalid OTP"),
            Self::OtpExpired => (
                StatusCode::BAD_REQUEST,
                "OTP has expired, please request a new one",
            ),
            Self::EmailTaken(_) => (StatusCode::CONFLICT, "Email is already registered"),
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
