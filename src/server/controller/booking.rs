use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, PaginatedBookingsDto, QuoteDto},
        user::Role,
    },
    server::{
        controller::param::{page_size, BookingListParams},
        data::booking::BookingScope,
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::BookingRequestParam,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping customer booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book an approved car.
///
/// Prices the booking, generates the ride code and assigns the best rated free driver
/// in the car's city when there is one.
///
/// # Access Control
/// - `Customer`
///
/// # Returns
/// - `201 Created` - The confirmed booking, including its ride code
/// - `400 Bad Request` - Invalid dates or coordinates
/// - `404 Not Found` - Car missing or not approved
/// - `409 Conflict` - Car already booked for overlapping dates
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking confirmed", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a customer", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 409, description = "Car unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Customer])
        .await?;

    let param = BookingRequestParam::from_dto(payload)?;
    let booking = BookingService::new(&state.db)
        .create(customer.id, param)
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto(None, true))))
}

/// Price a booking request without making it.
///
/// # Access Control
/// - `Customer`
///
/// # Returns
/// - `200 OK` - Price breakdown and whether the car is free
/// - `400 Bad Request` - Invalid dates or coordinates
/// - `404 Not Found` - Car missing or not approved
#[utoipa::path(
    post,
    path = "/api/bookings/quote",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Price quote", body = QuoteDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a customer", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Customer])
        .await?;

    let param = BookingRequestParam::from_dto(payload)?;
    let (quote, available) = BookingService::new(&state.db).quote(&param).await?;

    Ok(Json(QuoteDto {
        days: quote.days,
        estimated_distance_km: quote.distance_km,
        base_price: quote.base_price,
        ac_charge: quote.ac_charge,
        total_price: quote.total_price,
        available,
    }))
}

/// List the caller's bookings, newest first.
///
/// # Access Control
/// - `Customer`
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(
        ("status" = Option<String>, Query, description = "Only bookings in this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Customer's bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a customer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Customer])
        .await?;

    let bookings = BookingService::new(&state.db)
        .list(
            BookingScope::Customer(customer.id),
            params.status,
            params.page,
            page_size(params.per_page),
        )
        .await?;

    Ok(Json(bookings.into_dto(true)))
}

/// Get a booking.
///
/// Visible to its customer, the car owner, the assigned driver and admins. Only the
/// customer and admins see the ride code.
///
/// # Returns
/// - `200 OK` - The booking
/// - `403 Forbidden` - Caller takes no part in the booking
/// - `404 Not Found` - Booking does not exist
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not part of this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (viewer, driver) = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_with_profile(&[])
        .await?;

    let (found, show_code) = BookingService::new(&state.db)
        .get_for_viewer(id, &viewer, driver.map(|d| d.id))
        .await?;

    Ok(Json(found.booking.into_dto(found.car_name, show_code)))
}

/// Cancel a confirmed booking.
///
/// A fine applies when cancelling less than 48 hours before the start date.
///
/// # Access Control
/// - `Customer` - Only the customer who made the booking
///
/// # Returns
/// - `200 OK` - The cancelled booking with its fine
/// - `404 Not Found` - Booking missing or made by someone else
/// - `409 Conflict` - Booking is not confirmed
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a customer", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking cannot be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Customer])
        .await?;

    let booking = BookingService::new(&state.db)
        .cancel(id, customer.id)
        .await?;

    Ok(Json(booking.into_dto(None, true)))
}
