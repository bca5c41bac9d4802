use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, MessageDto, RegisterDto, SendOtpDto},
        user::MeDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::RegisterParam,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Send a signup passcode.
///
/// Emails a 6-digit passcode that `register` must be called with. Requesting a new
/// passcode replaces the previous one.
///
/// # Returns
/// - `200 OK` - Passcode sent
/// - `400 Bad Request` - Malformed email
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or mail relay error
#[utoipa::path(
    post,
    path = "/api/auth/send-otp",
    tag = AUTH_TAG,
    request_body = SendOtpDto,
    responses(
        (status = 200, description = "Passcode sent", body = MessageDto),
        (status = 400, description = "Malformed email", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_otp(
    State(state): State<AppState>,
    Json(payload): Json<SendOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.tokens, &state.mailer, state.otp_ttl)
        .send_signup_otp(&payload.email)
        .await?;

    Ok(Json(MessageDto {
        message: "OTP sent".to_string(),
    }))
}

/// Register a customer, owner or driver account.
///
/// Drivers are created awaiting approval and receive `token: null`.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid fields, role or passcode
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.tokens, &state.mailer, state.otp_ttl)
        .register(RegisterParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Token and user
/// - `401 Unauthorized` - Wrong email or password
/// - `403 Forbidden` - Driver awaiting approval or rejected
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Driver not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.tokens, &state.mailer, state.otp_ttl)
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponseDto {
        token: Some(token),
        user: user.into_dto(),
    }))
}

/// Get the authenticated user.
///
/// # Returns
/// - `200 OK` - The user, with the driver profile for drivers
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Driver no longer approved
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = MeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Driver not approved", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let (user, driver) = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_with_profile(&[])
        .await?;

    let driver = driver.map(|driver| driver.into_dto(&user));

    Ok(Json(MeDto {
        user: user.into_dto(),
        driver,
    }))
}
