use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        admin::{ApprovalCountsDto, BookingCountsDto, StatsDto, UserCountsDto},
        api::{ApprovalStatus, ErrorDto, HealthDto, RejectDto},
        auth::{AuthResponseDto, LoginDto, MessageDto, RegisterDto, SendOtpDto},
        booking::{
            BookingDto, BookingStatus, CompleteRideDto, CreateBookingDto, EndRideDto,
            LocationDto, PaginatedBookingsDto, PricingMode, QuoteDto, StartRideDto,
        },
        car::{AvailabilityDto, CarDto, CarInputDto, PaginatedCarsDto},
        driver::{DriverDto, PaginatedDriversDto},
        geocode::GeocodeResultDto,
        user::{MeDto, PaginatedUsersDto, Role, UserDto},
    },
    server::{
        controller::{admin, auth, booking, car, driver, geocode, health, owner},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Rental API", description = "Car rental marketplace backend"),
    paths(
        health::health,
        auth::send_otp,
        auth::register,
        auth::login,
        auth::me,
        car::list_cars,
        car::get_car,
        car::availability,
        owner::create_car,
        owner::list_cars,
        owner::update_car,
        owner::delete_car,
        owner::list_bookings,
        booking::create_booking,
        booking::quote,
        booking::list_bookings,
        booking::get_booking,
        booking::cancel_booking,
        driver::list_bookings,
        driver::start_ride,
        driver::end_ride,
        driver::complete_ride,
        admin::list_cars,
        admin::approve_car,
        admin::reject_car,
        admin::list_drivers,
        admin::approve_driver,
        admin::reject_driver,
        admin::list_users,
        admin::list_bookings,
        admin::assign_driver,
        admin::stats,
        geocode::search,
    ),
    components(schemas(
        ErrorDto, HealthDto, ApprovalStatus, RejectDto,
        SendOtpDto, MessageDto, RegisterDto, LoginDto, AuthResponseDto,
        Role, UserDto, MeDto, PaginatedUsersDto,
        CarDto, CarInputDto, PaginatedCarsDto, AvailabilityDto,
        DriverDto, PaginatedDriversDto,
        PricingMode, BookingStatus, LocationDto, CreateBookingDto, QuoteDto, BookingDto,
        PaginatedBookingsDto, StartRideDto, EndRideDto, CompleteRideDto,
        UserCountsDto, ApprovalCountsDto, BookingCountsDto, StatsDto,
        GeocodeResultDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Signup, login and the current user"),
        (name = "car", description = "Public car catalogue"),
        (name = "owner", description = "Car owners' listings and bookings"),
        (name = "booking", description = "Customer bookings"),
        (name = "driver", description = "Ride lifecycle for assigned drivers"),
        (name = "admin", description = "Approvals, oversight and statistics"),
        (name = "geocode", description = "Address search"),
    ),
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/send-otp", post(auth::send_otp))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/cars", get(car::list_cars))
        .route("/api/cars/{id}", get(car::get_car))
        .route("/api/cars/{id}/availability", get(car::availability))
        .route(
            "/api/owner/cars",
            get(owner::list_cars).post(owner::create_car),
        )
        .route(
            "/api/owner/cars/{id}",
            put(owner::update_car).delete(owner::delete_car),
        )
        .route("/api/owner/bookings", get(owner::list_bookings))
        .route(
            "/api/bookings",
            get(booking::list_bookings).post(booking::create_booking),
        )
        .route("/api/bookings/quote", post(booking::quote))
        .route("/api/bookings/{id}", get(booking::get_booking))
        .route("/api/bookings/{id}/cancel", post(booking::cancel_booking))
        .route("/api/driver/bookings", get(driver::list_bookings))
        .route("/api/driver/bookings/{id}/start", post(driver::start_ride))
        .route("/api/driver/bookings/{id}/end", post(driver::end_ride))
        .route(
            "/api/driver/bookings/{id}/complete",
            post(driver::complete_ride),
        )
        .route("/api/admin/cars", get(admin::list_cars))
        .route("/api/admin/cars/{id}/approve", post(admin::approve_car))
        .route("/api/admin/cars/{id}/reject", post(admin::reject_car))
        .route("/api/admin/drivers", get(admin::list_drivers))
        .route(
            "/api/admin/drivers/{id}/approve",
            post(admin::approve_driver),
        )
        .route("/api/admin/drivers/{id}/reject", post(admin::reject_driver))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/bookings", get(admin::list_bookings))
        .route(
            "/api/admin/bookings/{id}/assign-driver",
            post(admin::assign_driver),
        )
        .route("/api/admin/stats", get(admin::stats))
        .route("/api/geocode", get(geocode::search))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
