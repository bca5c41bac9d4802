use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::StatsDto,
        api::{ApprovalStatus, ErrorDto, RejectDto},
        booking::{BookingDto, PaginatedBookingsDto},
        car::{CarDto, PaginatedCarsDto},
        driver::{DriverDto, PaginatedDriversDto},
        user::{PaginatedUsersDto, Role},
    },
    server::{
        controller::param::{
            page_size, ApprovalListParams, BookingListParams, UserListParams,
        },
        data::booking::BookingScope,
        error::AppError,
        middleware::auth::AuthGuard,
        service::{
            admin::{AdminService, Review},
            booking::BookingService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List cars by approval status.
///
/// Defaults to the cars awaiting review.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/cars",
    tag = ADMIN_TAG,
    params(
        ("status" = Option<String>, Query, description = "pending (default), approved or rejected"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Cars", body = PaginatedCarsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ApprovalListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let status = params.status.unwrap_or(ApprovalStatus::Pending);
    let cars = AdminService::new(&state.db)
        .list_cars(Some(status), params.page, page_size(params.per_page))
        .await?;

    Ok(Json(cars.into_dto()))
}

/// Approve a pending car.
///
/// # Returns
/// - `200 OK` - The approved car
/// - `404 Not Found` - Car does not exist
/// - `409 Conflict` - Car is not pending
#[utoipa::path(
    post,
    path = "/api/admin/cars/{id}/approve",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car approved", body = CarDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 409, description = "Car is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn approve_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let car = AdminService::new(&state.db)
        .review_car(id, Review::Approve)
        .await?;

    Ok(Json(car.into_dto()))
}

/// Reject a pending car with an optional reason.
#[utoipa::path(
    post,
    path = "/api/admin/cars/{id}/reject",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    request_body(content = RejectDto, description = "Optional rejection reason"),
    responses(
        (status = 200, description = "Car rejected", body = CarDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 409, description = "Car is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn reject_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<RejectDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let car = AdminService::new(&state.db)
        .review_car(id, rejection(payload))
        .await?;

    Ok(Json(car.into_dto()))
}

/// List driver profiles, optionally by approval status.
#[utoipa::path(
    get,
    path = "/api/admin/drivers",
    tag = ADMIN_TAG,
    params(
        ("status" = Option<String>, Query, description = "pending, approved or rejected"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Drivers", body = PaginatedDriversDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_drivers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ApprovalListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let drivers = AdminService::new(&state.db)
        .list_drivers(params.status, params.page, page_size(params.per_page))
        .await?;

    Ok(Json(drivers.into_dto()))
}

/// Approve a pending driver, letting them log in and receive bookings.
#[utoipa::path(
    post,
    path = "/api/admin/drivers/{id}/approve",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Driver ID")
    ),
    responses(
        (status = 200, description = "Driver approved", body = DriverDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 409, description = "Driver is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn approve_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let (driver, user) = AdminService::new(&state.db)
        .review_driver(id, Review::Approve)
        .await?;

    Ok(Json(driver.into_dto(&user)))
}

/// Reject a pending driver with an optional reason.
#[utoipa::path(
    post,
    path = "/api/admin/drivers/{id}/reject",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Driver ID")
    ),
    request_body(content = RejectDto, description = "Optional rejection reason"),
    responses(
        (status = 200, description = "Driver rejected", body = DriverDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 409, description = "Driver is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn reject_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<RejectDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let (driver, user) = AdminService::new(&state.db)
        .review_driver(id, rejection(payload))
        .await?;

    Ok(Json(driver.into_dto(&user)))
}

/// List user accounts, optionally by role.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("role" = Option<String>, Query, description = "customer, owner, driver or admin"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let users = AdminService::new(&state.db)
        .list_users(params.role, params.page, page_size(params.per_page))
        .await?;

    Ok(Json(users.into_dto()))
}

/// List every booking, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ADMIN_TAG,
    params(
        ("status" = Option<String>, Query, description = "Only bookings in this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let bookings = BookingService::new(&state.db)
        .list(
            BookingScope::All,
            params.status,
            params.page,
            page_size(params.per_page),
        )
        .await?;

    Ok(Json(bookings.into_dto(true)))
}

/// Assign a driver to a confirmed booking that was made without one.
///
/// # Returns
/// - `200 OK` - Booking with its new driver
/// - `404 Not Found` - Booking does not exist
/// - `409 Conflict` - Booking not confirmed, already has a driver, or no driver is free
#[utoipa::path(
    post,
    path = "/api/admin/bookings/{id}/assign-driver",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Driver assigned", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Driver cannot be assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn assign_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let booking = BookingService::new(&state.db).assign_driver(id).await?;

    Ok(Json(booking.into_dto(None, true)))
}

/// Platform counts and revenue.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Platform statistics", body = StatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let stats = AdminService::new(&state.db).stats().await?;

    Ok(Json(stats))
}

fn rejection(payload: Option<Json<RejectDto>>) -> Review {
    Review::Reject {
        reason: payload.and_then(|Json(dto)| dto.reason),
    }
}
