//! Booking service for reservations, quotes and cancellations.
//!
//! - `pricing` - Price, fine and distance arithmetic
//! - `assignment` - Greedy driver assignment

pub mod assignment;
pub mod pricing;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{api::ApprovalStatus, booking::BookingStatus, user::Role},
    server::{
        data::{
            booking::{BookingRepository, BookingScope},
            car::CarRepository,
        },
        error::{auth::AuthError, booking::BookingError, AppError},
        model::{
            booking::{
                Booking, BookingRequestParam, BookingWithCar, CreateBookingParam,
                PaginatedBookings,
            },
            car::Car,
            user::User,
        },
        service::booking::pricing::{PriceQuote, Rates},
        util::code::random_digits,
    },
};

const UNIQUE_CODE_LENGTH: usize = 6;

/// How far in the past a start date may be, to absorb client clock drift.
const START_DATE_GRACE_MINUTES: i64 = 5;

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Prices a request without storing anything.
    ///
    /// # Returns
    /// - `Ok((quote, available))` - Price and whether the car is free for the dates
    /// - `Err(AppError::NotFound)` - Car missing or not approved
    /// - `Err(BookingError::InvalidDateRange)` - Dates are reversed or in the past
    pub async fn quote(&self, param: &BookingRequestParam) -> Result<(PriceQuote, bool), AppError> {
        let car = self.approved_car(param.car_id).await?;
        validate_dates(param.start_date, param.end_date, Utc::now())?;

        let quote = price(&car, param);
        let available = !BookingRepository::new(self.db)
            .car_has_overlap(car.id, param.start_date, param.end_date)
            .await?;

        Ok((quote, available))
    }

    /// Books a car for a customer.
    ///
    /// A driver is assigned when one is free in the car's city. The booking is created
    /// without one otherwise and an admin can assign one later.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The confirmed booking
    /// - `Err(AppError::NotFound)` - Car missing or not approved
    /// - `Err(BookingError::InvalidDateRange)` - Dates are reversed or in the past
    /// - `Err(BookingError::CarUnavailable)` - Car already booked for an overlapping range
    pub async fn create(
        &self,
        customer_id: i32,
        param: BookingRequestParam,
    ) -> Result<Booking, AppError> {
        let car = self.approved_car(param.car_id).await?;
        validate_dates(param.start_date, param.end_date, Utc::now())?;

        let booking_repo = BookingRepository::new(self.db);
        if booking_repo
            .car_has_overlap(car.id, param.start_date, param.end_date)
            .await?
        {
            return Err(BookingError::CarUnavailable.into());
        }

        let driver = self
            .find_available_driver(&car.city, param.start_date, param.end_date)
            .await?;
        if driver.is_none() {
            tracing::warn!(
                "No driver available in {} for car {}, booking without driver",
                car.city,
                car.id
            );
        }

        let quote = price(&car, &param);
        let booking = booking_repo
            .create(CreateBookingParam {
                customer_id,
                car_id: car.id,
                driver_id: driver.map(|d| d.id),
                start_date: param.start_date,
                end_date: param.end_date,
                pricing_mode: param.pricing_mode,
                ac: param.ac,
                pickup: param.pickup,
                drop: param.drop,
                estimated_distance_km: quote.distance_km,
                base_price: quote.base_price,
                ac_charge: quote.ac_charge,
                total_price: quote.total_price,
                unique_code: random_digits(UNIQUE_CODE_LENGTH),
            })
            .await?;

        tracing::info!(
            "Customer {} booked car {} as booking {}",
            customer_id,
            car.id,
            booking.id
        );

        Ok(booking)
    }

    /// Checks whether an approved car is free for a range.
    pub async fn availability(
        &self,
        car_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let car = self.approved_car(car_id).await?;
        if end <= start {
            return Err(BookingError::InvalidDateRange(
                "End date must be after start date".to_string(),
            )
            .into());
        }

        let taken = BookingRepository::new(self.db)
            .car_has_overlap(car.id, start, end)
            .await?;

        Ok(!taken)
    }

    /// Lists bookings for a scope, newest first.
    pub async fn list(
        &self,
        scope: BookingScope,
        status: Option<BookingStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBookings, AppError> {
        let (bookings, total) = BookingRepository::new(self.db)
            .get_paginated(scope, status, page, per_page)
            .await?;

        Ok(PaginatedBookings {
            bookings,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Gets a booking if the viewer takes part in it.
    ///
    /// The customer, the car owner, the assigned driver and admins may view a booking.
    ///
    /// # Arguments
    /// - `id` - Booking ID
    /// - `viewer` - Authenticated user
    /// - `viewer_driver_id` - Driver profile ID of the viewer, if any
    ///
    /// # Returns
    /// - `Ok((booking, show_code))` - Booking and whether the viewer may see its ride code
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(AuthError::AccessDenied)` - Viewer takes no part in the booking
    pub async fn get_for_viewer(
        &self,
        id: i32,
        viewer: &User,
        viewer_driver_id: Option<i32>,
    ) -> Result<(BookingWithCar, bool), AppError> {
        let Some((booking, car)) = BookingRepository::new(self.db).find_with_car(id).await?
        else {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        };

        let is_customer = booking.customer_id == viewer.id;
        let is_admin = viewer.role == Role::Admin;
        let is_owner = car.owner_id == viewer.id;
        let is_driver = viewer_driver_id.is_some() && booking.driver_id == viewer_driver_id;

        if !(is_customer || is_admin || is_owner || is_driver) {
            return Err(AuthError::AccessDenied(
                viewer.id,
                format!("User is not part of booking {}", id),
            )
            .into());
        }

        Ok((
            BookingWithCar {
                booking,
                car_name: Some(car.name),
            },
            is_customer || is_admin,
        ))
    }

    /// Cancels a confirmed booking on behalf of its customer, charging the fine due.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The cancelled booking
    /// - `Err(AppError::NotFound)` - Booking missing or owned by another customer
    /// - `Err(BookingError::InvalidStatus)` - Booking is not confirmed
    pub async fn cancel(&self, id: i32, customer_id: i32) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let booking = match booking_repo.find_by_id(id).await? {
            Some(booking) if booking.customer_id == customer_id => booking,
            _ => return Err(AppError::NotFound(format!("Booking {} not found", id))),
        };

        if booking.status != BookingStatus::Confirmed {
            return Err(BookingError::InvalidStatus {
                current: booking.status,
                action: "cancel",
            }
            .into());
        }

        let now = Utc::now();
        let fine = pricing::cancellation_fine(booking.start_date, now);
        let booking = booking_repo.cancel(booking.id, fine, now).await?;

        tracing::info!("Booking {} cancelled with fine {}", booking.id, fine);

        Ok(booking)
    }

    async fn approved_car(&self, car_id: i32) -> Result<Car, AppError> {
        match CarRepository::new(self.db).find_by_id(car_id).await? {
            Some(car) if car.approval_status == ApprovalStatus::Approved => Ok(car),
            _ => Err(AppError::NotFound(format!("Car {} not found", car_id))),
        }
    }
}

fn price(car: &Car, param: &BookingRequestParam) -> PriceQuote {
    pricing::quote(
        param.pricing_mode,
        Rates {
            price_per_day: car.price_per_day,
            price_per_km: car.price_per_km,
        },
        param.start_date,
        param.end_date,
        &param.pickup,
        &param.drop,
        param.ac,
    )
}

fn validate_dates(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), BookingError> {
    if end <= start {
        return Err(BookingError::InvalidDateRange(
            "End date must be after start date".to_string(),
        ));
    }
    if start < now - Duration::minutes(START_DATE_GRACE_MINUTES) {
        return Err(BookingError::InvalidDateRange(
            "Start date cannot be in the past".to_string(),
        ));
    }

    Ok(())
}
