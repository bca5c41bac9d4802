use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        car::{AvailabilityDto, CarDto, PaginatedCarsDto},
    },
    server::{
        controller::param::{page_size, AvailabilityParams, CarListParams},
        error::AppError,
        middleware::auth::AuthGuard,
        service::{booking::BookingService, car::CarService},
        state::AppState,
    },
};

/// Tag for grouping public car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

/// List approved cars.
///
/// # Returns
/// - `200 OK` - Page of approved cars, newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = CAR_TAG,
    params(
        ("city" = Option<String>, Query, description = "Only cars in this city"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Approved cars", body = PaginatedCarsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cars(
    State(state): State<AppState>,
    Query(params): Query<CarListParams>,
) -> Result<impl IntoResponse, AppError> {
    let city = params
        .city
        .as_deref()
        .map(str::trim)
        .filter(|city| !city.is_empty());

    let cars = CarService::new(&state.db)
        .list_approved(city, params.page, page_size(params.per_page))
        .await?;

    Ok(Json(cars.into_dto()))
}

/// Get a car.
///
/// Cars that are not approved are only returned to their owner and to admins. A bearer
/// token is optional.
///
/// # Returns
/// - `200 OK` - The car
/// - `401 Unauthorized` - A token was sent but is invalid
/// - `404 Not Found` - Car missing or not visible to the caller
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "The car", body = CarDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .optional()
        .await?;

    let car = CarService::new(&state.db)
        .get_for_viewer(id, viewer.as_ref())
        .await?;

    Ok(Json(car.into_dto()))
}

/// Check whether an approved car is free for a date range.
///
/// # Returns
/// - `200 OK` - Availability flag
/// - `400 Bad Request` - End date not after start date
/// - `404 Not Found` - Car missing or not approved
#[utoipa::path(
    get,
    path = "/api/cars/{id}/availability",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID"),
        ("start_date" = String, Query, description = "RFC 3339 start of the range"),
        ("end_date" = String, Query, description = "RFC 3339 end of the range")
    ),
    responses(
        (status = 200, description = "Availability", body = AvailabilityDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<AvailabilityParams>,
) -> Result<impl IntoResponse, AppError> {
    let available = BookingService::new(&state.db)
        .availability(id, params.start_date, params.end_date)
        .await?;

    Ok(Json(AvailabilityDto { available }))
}
