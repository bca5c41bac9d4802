use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::PaginatedBookingsDto,
        car::{CarDto, CarInputDto},
        user::Role,
    },
    server::{
        controller::param::{page_size, BookingListParams},
        data::booking::BookingScope,
        error::AppError,
        middleware::auth::AuthGuard,
        model::car::CarDetailsParam,
        service::{booking::BookingService, car::CarService},
        state::AppState,
    },
};

/// Tag for grouping owner endpoints in OpenAPI documentation
pub static OWNER_TAG: &str = "owner";

/// List a car for rent.
///
/// The car is hidden from customers until an admin approves it.
///
/// # Access Control
/// - `Owner`
///
/// # Returns
/// - `201 Created` - The car, pending review
/// - `400 Bad Request` - Invalid car details
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an owner
#[utoipa::path(
    post,
    path = "/api/owner/cars",
    tag = OWNER_TAG,
    request_body = CarInputDto,
    responses(
        (status = 201, description = "Car listed for review", body = CarDto),
        (status = 400, description = "Invalid car details", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CarInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    let car = CarService::new(&state.db)
        .create(owner.id, CarDetailsParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// List the caller's cars in every approval state.
#[utoipa::path(
    get,
    path = "/api/owner/cars",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Owner's cars", body = Vec<CarDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    let cars: Vec<CarDto> = CarService::new(&state.db)
        .list_for_owner(owner.id)
        .await?
        .into_iter()
        .map(|car| car.into_dto())
        .collect();

    Ok(Json(cars))
}

/// Replace the details of one of the caller's cars.
///
/// Editing sends the car back to review.
///
/// # Returns
/// - `200 OK` - The updated car, pending review
/// - `400 Bad Request` - Invalid car details
/// - `404 Not Found` - Car missing or owned by someone else
#[utoipa::path(
    put,
    path = "/api/owner/cars/{id}",
    tag = OWNER_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    request_body = CarInputDto,
    responses(
        (status = 200, description = "Car updated", body = CarDto),
        (status = 400, description = "Invalid car details", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an owner", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CarInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    let car = CarService::new(&state.db)
        .update(owner.id, id, CarDetailsParam::from_dto(payload))
        .await?;

    Ok(Json(car.into_dto()))
}

/// Delete one of the caller's cars.
///
/// # Returns
/// - `204 No Content` - Car deleted
/// - `404 Not Found` - Car missing or owned by someone else
/// - `409 Conflict` - Car has confirmed or ongoing bookings
#[utoipa::path(
    delete,
    path = "/api/owner/cars/{id}",
    tag = OWNER_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an owner", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 409, description = "Car has active bookings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    CarService::new(&state.db).delete(owner.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List bookings made on the caller's cars.
///
/// Ride codes are hidden from owners.
#[utoipa::path(
    get,
    path = "/api/owner/bookings",
    tag = OWNER_TAG,
    params(
        ("status" = Option<String>, Query, description = "Only bookings in this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Bookings on the owner's cars", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    let bookings = BookingService::new(&state.db)
        .list(
            BookingScope::Owner(owner.id),
            params.status,
            params.page,
            page_size(params.per_page),
        )
        .await?;

    Ok(Json(bookings.into_dto(false)))
}
