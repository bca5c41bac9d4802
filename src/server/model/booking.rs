//! Domain models for bookings and their ride lifecycle.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{
        BookingDto, BookingStatus, CreateBookingDto, LocationDto, PaginatedBookingsDto,
        PricingMode,
    },
    server::{
        error::{booking::BookingError, AppError},
        util::parse::parse_stored,
    },
};

/// A geographic point with an optional human-readable address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub address: Option<String>,
}

impl GeoPoint {
    /// Converts the request location, rejecting coordinates outside valid ranges.
    pub fn from_dto(dto: LocationDto) -> Result<Self, BookingError> {
        let valid = dto.lat.is_finite()
            && dto.lng.is_finite()
            && (-90.0..=90.0).contains(&dto.lat)
            && (-180.0..=180.0).contains(&dto.lng);
        if !valid {
            return Err(BookingError::InvalidCoordinates);
        }

        Ok(Self {
            lat: dto.lat,
            lng: dto.lng,
            address: dto.address.filter(|a| !a.trim().is_empty()),
        })
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            lat: self.lat,
            lng: self.lng,
            address: self.address,
        }
    }
}

/// Reservation of a car by a customer, optionally served by a driver.
///
/// Prices are whole currency units. `total_price` is the estimate at creation and is
/// replaced by the settled price when a per-km ride completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub customer_id: i32,
    pub car_id: i32,
    pub driver_id: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub pricing_mode: PricingMode,
    pub ac: bool,
    pub pickup: GeoPoint,
    pub drop: GeoPoint,
    pub estimated_distance_km: f64,
    pub base_price: i64,
    pub ac_charge: i64,
    pub total_price: i64,
    pub status: BookingStatus,
    /// Six-digit code the customer gives the driver to start and end the ride.
    pub unique_code: String,
    pub cancellation_fine: i64,
    pub late_fine: i64,
    pub actual_distance_km: Option<f64>,
    pub actual_return_date: Option<DateTime<Utc>>,
    pub ride_started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            customer_id: entity.customer_id,
            car_id: entity.car_id,
            driver_id: entity.driver_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            pricing_mode: parse_stored(
                "booking.pricing_mode",
                entity.pricing_mode,
                PricingMode::parse,
            )?,
            ac: entity.ac,
            pickup: GeoPoint {
                lat: entity.pickup_lat,
                lng: entity.pickup_lng,
                address: entity.pickup_address,
            },
            drop: GeoPoint {
                lat: entity.drop_lat,
                lng: entity.drop_lng,
                address: entity.drop_address,
            },
            estimated_distance_km: entity.estimated_distance_km,
            base_price: entity.base_price,
            ac_charge: entity.ac_charge,
            total_price: entity.total_price,
            status: parse_stored("booking.status", entity.status, BookingStatus::parse)?,
            unique_code: entity.unique_code,
            cancellation_fine: entity.cancellation_fine,
            late_fine: entity.late_fine,
            actual_distance_km: entity.actual_distance_km,
            actual_return_date: entity.actual_return_date,
            ride_started_at: entity.ride_started_at,
            completed_at: entity.completed_at,
            cancelled_at: entity.cancelled_at,
            created_at: entity.created_at,
        })
    }

    /// Converts to a DTO.
    ///
    /// # Arguments
    /// - `car_name` - Display name of the booked car, when the caller loaded it
    /// - `show_code` - Whether the caller may see the ride code (customer and admin)
    pub fn into_dto(self, car_name: Option<String>, show_code: bool) -> BookingDto {
        BookingDto {
            id: self.id,
            customer_id: self.customer_id,
            car_id: self.car_id,
            car_name,
            driver_id: self.driver_id,
            start_date: self.start_date,
            end_date: self.end_date,
            pricing_mode: self.pricing_mode,
            ac: self.ac,
            pickup: self.pickup.into_dto(),
            drop: self.drop.into_dto(),
            estimated_distance_km: self.estimated_distance_km,
            base_price: self.base_price,
            ac_charge: self.ac_charge,
            total_price: self.total_price,
            status: self.status,
            unique_code: show_code.then_some(self.unique_code),
            cancellation_fine: self.cancellation_fine,
            late_fine: self.late_fine,
            actual_distance_km: self.actual_distance_km,
            actual_return_date: self.actual_return_date,
            ride_started_at: self.ride_started_at,
            completed_at: self.completed_at,
            cancelled_at: self.cancelled_at,
            created_at: self.created_at,
        }
    }
}

/// Fully priced booking ready to be stored.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub customer_id: i32,
    pub car_id: i32,
    pub driver_id: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub pricing_mode: PricingMode,
    pub ac: bool,
    pub pickup: GeoPoint,
    pub drop: GeoPoint,
    pub estimated_distance_km: f64,
    pub base_price: i64,
    pub ac_charge: i64,
    pub total_price: i64,
    pub unique_code: String,
}

/// Customer request for a booking or a quote, before pricing.
#[derive(Debug, Clone)]
pub struct BookingRequestParam {
    pub car_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub pricing_mode: PricingMode,
    pub ac: bool,
    pub pickup: GeoPoint,
    pub drop: GeoPoint,
}

impl BookingRequestParam {
    /// Converts the request DTO, checking both coordinates.
    pub fn from_dto(dto: CreateBookingDto) -> Result<Self, BookingError> {
        Ok(Self {
            car_id: dto.car_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            pricing_mode: dto.pricing_mode,
            ac: dto.ac,
            pickup: GeoPoint::from_dto(dto.pickup)?,
            drop: GeoPoint::from_dto(dto.drop)?,
        })
    }
}

/// Booking with the display name of its car, for list views.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithCar {
    pub booking: Booking,
    pub car_name: Option<String>,
}

/// Paginated collection of bookings with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBookings {
    pub bookings: Vec<BookingWithCar>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBookings {
    pub fn into_dto(self, show_code: bool) -> PaginatedBookingsDto {
        let bookings = self
            .bookings
            .into_iter()
            .map(|b| b.booking.into_dto(b.car_name, show_code))
            .collect();

        PaginatedBookingsDto {
            bookings,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
