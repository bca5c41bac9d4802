use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CompleteRideDto, EndRideDto, PaginatedBookingsDto, StartRideDto},
    },
    server::{
        controller::param::{page_size, BookingListParams},
        data::booking::BookingScope,
        error::AppError,
        middleware::auth::AuthGuard,
        service::{
            booking::BookingService,
            ride::{EndRideParam, RideService},
        },
        state::AppState,
    },
};

/// Tag for grouping driver endpoints in OpenAPI documentation
pub static DRIVER_TAG: &str = "driver";

/// List bookings assigned to the caller.
///
/// # Access Control
/// - `Driver` - Approved drivers only
#[utoipa::path(
    get,
    path = "/api/driver/bookings",
    tag = DRIVER_TAG,
    params(
        ("status" = Option<String>, Query, description = "Only bookings in this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Assigned bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not an approved driver", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (_, driver) = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_driver()
        .await?;

    let bookings = BookingService::new(&state.db)
        .list(
            BookingScope::Driver(driver.id),
            params.status,
            params.page,
            page_size(params.per_page),
        )
        .await?;

    Ok(Json(bookings.into_dto(false)))
}

/// Start a ride with the code the customer shows the driver.
///
/// # Returns
/// - `200 OK` - Booking now ongoing
/// - `400 Bad Request` - Code does not match
/// - `403 Forbidden` - Caller is not the assigned driver
/// - `404 Not Found` - Booking does not exist
/// - `409 Conflict` - Booking is not confirmed
#[utoipa::path(
    post,
    path = "/api/driver/bookings/{id}/start",
    tag = DRIVER_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = StartRideDto,
    responses(
        (status = 200, description = "Ride started", body = BookingDto),
        (status = 400, description = "Invalid unique code", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the assigned driver", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking is not confirmed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn start_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<StartRideDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, driver) = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_driver()
        .await?;

    let booking = RideService::new(&state.db, &state.mailer, state.otp_ttl)
        .start(id, &driver, &payload.unique_code)
        .await?;

    Ok(Json(booking.into_dto(None, false)))
}

/// End a ride and mail the customer a completion passcode.
///
/// `actual_distance_km` is required for per-km bookings. `actual_return_date` defaults
/// to now.
///
/// # Returns
/// - `200 OK` - Ride values recorded, booking still ongoing
/// - `400 Bad Request` - Code mismatch or missing or negative distance
/// - `403 Forbidden` - Caller is not the assigned driver
/// - `409 Conflict` - Booking is not ongoing
#[utoipa::path(
    post,
    path = "/api/driver/bookings/{id}/end",
    tag = DRIVER_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = EndRideDto,
    responses(
        (status = 200, description = "Ride ended, passcode sent", body = BookingDto),
        (status = 400, description = "Invalid ride values", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the assigned driver", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking is not ongoing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn end_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<EndRideDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, driver) = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_driver()
        .await?;

    let param = EndRideParam {
        unique_code: payload.unique_code,
        actual_distance_km: payload.actual_distance_km,
        actual_return_date: payload.actual_return_date,
    };
    let booking = RideService::new(&state.db, &state.mailer, state.otp_ttl)
        .end(id, &driver, param)
        .await?;

    Ok(Json(booking.into_dto(None, false)))
}

/// Complete a ride with the passcode the customer received.
///
/// Settles the final price and any late-return fine.
///
/// # Returns
/// - `200 OK` - Booking completed
/// - `400 Bad Request` - Passcode invalid or expired
/// - `403 Forbidden` - Caller is not the assigned driver
/// - `409 Conflict` - Ride not ongoing or not ended yet
#[utoipa::path(
    post,
    path = "/api/driver/bookings/{id}/complete",
    tag = DRIVER_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = CompleteRideDto,
    responses(
        (status = 200, description = "Ride completed", body = BookingDto),
        (status = 400, description = "Invalid passcode", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the assigned driver", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Ride cannot be completed yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn complete_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CompleteRideDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, driver) = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_driver()
        .await?;

    let booking = RideService::new(&state.db, &state.mailer, state.otp_ttl)
        .complete(id, &driver, &payload.otp)
        .await?;

    Ok(Json(booking.into_dto(None, false)))
}
