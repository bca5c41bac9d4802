//! Ride lifecycle run by the assigned driver.
//!
//! A confirmed booking is started with the customer's ride code. Ending it records the
//! distance and return time and mails the customer a completion passcode. The driver
//! completes the ride with that passcode, which settles the final price and any late fine.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::booking::{BookingStatus, PricingMode},
    server::{
        data::{booking::BookingRepository, user::UserRepository},
        error::{booking::BookingError, AppError},
        model::{booking::Booking, car::Car, driver::Driver, otp::OtpPurpose},
        service::{
            booking::pricing::{self, Rates},
            mail::Mailer,
            otp::OtpService,
        },
    },
};

/// Values the driver reports when ending a ride.
#[derive(Debug, Clone)]
pub struct EndRideParam {
    pub unique_code: String,
    pub actual_distance_km: Option<f64>,
    /// Defaults to the time of the request.
    pub actual_return_date: Option<DateTime<Utc>>,
}

pub struct RideService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
    otp_ttl: Duration,
}

impl<'a> RideService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer, otp_ttl: Duration) -> Self {
        Self {
            db,
            mailer,
            otp_ttl,
        }
    }

    /// Starts a confirmed ride after checking the customer's ride code.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking now `ongoing`
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(BookingError::NotAssignedDriver)` - Caller is not the assigned driver
    /// - `Err(BookingError::InvalidStatus)` - Booking is not confirmed
    /// - `Err(BookingError::InvalidUniqueCode)` - Code does not match
    pub async fn start(
        &self,
        booking_id: i32,
        driver: &Driver,
        unique_code: &str,
    ) -> Result<Booking, AppError> {
        let (booking, _) = self.assigned_booking(booking_id, driver).await?;
        require_status(&booking, BookingStatus::Confirmed, "start the ride")?;
        check_code(&booking, unique_code)?;

        let booking = BookingRepository::new(self.db)
            .start_ride(booking.id, Utc::now())
            .await?;
        tracing::info!("Driver {} started ride for booking {}", driver.id, booking.id);

        Ok(booking)
    }

    /// Records the end of an ongoing ride and sends the customer a completion passcode.
    ///
    /// Calling this again replaces the recorded values and the passcode.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking with the reported values, still `ongoing`
    /// - `Err(BookingError::MissingDistance)` - Per-km booking without a distance
    /// - `Err(AppError::BadRequest)` - Negative distance
    /// - Plus the errors of [`RideService::start`] for the same checks
    pub async fn end(
        &self,
        booking_id: i32,
        driver: &Driver,
        param: EndRideParam,
    ) -> Result<Booking, AppError> {
        let (booking, _) = self.assigned_booking(booking_id, driver).await?;
        require_status(&booking, BookingStatus::Ongoing, "end the ride")?;
        check_code(&booking, &param.unique_code)?;

        if let Some(distance) = param.actual_distance_km {
            if !distance.is_finite() || distance < 0.0 {
                return Err(AppError::BadRequest(
                    "Distance cannot be negative".to_string(),
                ));
            }
        }
        if booking.pricing_mode == PricingMode::PerKm && param.actual_distance_km.is_none() {
            return Err(BookingError::MissingDistance(
                "Actual distance is required for per-km bookings".to_string(),
            )
            .into());
        }

        let returned_at = param.actual_return_date.unwrap_or_else(Utc::now);
        let booking = BookingRepository::new(self.db)
            .record_ride_end(booking.id, param.actual_distance_km, returned_at)
            .await?;

        let customer_email = self.customer_email(&booking).await?;
        let code = OtpService::new(self.db, self.otp_ttl)
            .issue(&customer_email, OtpPurpose::RideCompletion, Some(booking.id))
            .await?;
        self.mailer
            .send_otp(&customer_email, &code, OtpPurpose::RideCompletion)
            .await?;

        tracing::info!("Driver {} ended ride for booking {}", driver.id, booking.id);

        Ok(booking)
    }

    /// Completes an ended ride with the customer's passcode and settles the price.
    ///
    /// Per-km bookings are repriced from the reported distance. Per-day bookings keep
    /// their booked price. A late fine applies when the car came back after the end date.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking now `completed`
    /// - `Err(AppError::Conflict)` - Ride has not been ended yet
    /// - `Err(AuthError::InvalidOtp | OtpExpired)` - Passcode check failed
    /// - Plus the errors of [`RideService::start`] for the same checks
    pub async fn complete(
        &self,
        booking_id: i32,
        driver: &Driver,
        otp: &str,
    ) -> Result<Booking, AppError> {
        let (booking, car) = self.assigned_booking(booking_id, driver).await?;
        require_status(&booking, BookingStatus::Ongoing, "complete the ride")?;

        let Some(returned_at) = booking.actual_return_date else {
            return Err(AppError::Conflict(
                "Ride must be ended before it can be completed".to_string(),
            ));
        };

        let customer_email = self.customer_email(&booking).await?;
        OtpService::new(self.db, self.otp_ttl)
            .verify_and_consume(
                &customer_email,
                OtpPurpose::RideCompletion,
                Some(booking.id),
                otp,
            )
            .await?;

        let (base_price, ac_charge) = settle(&booking, &car);
        let late_fine = pricing::late_fine(booking.end_date, returned_at);

        let booking = BookingRepository::new(self.db)
            .complete(booking.id, base_price, ac_charge, late_fine, Utc::now())
            .await?;
        tracing::info!(
            "Booking {} completed at {} with late fine {}",
            booking.id,
            booking.total_price,
            late_fine
        );

        Ok(booking)
    }

    async fn assigned_booking(
        &self,
        booking_id: i32,
        driver: &Driver,
    ) -> Result<(Booking, Car), AppError> {
        let Some((booking, car)) = BookingRepository::new(self.db)
            .find_with_car(booking_id)
            .await?
        else {
            return Err(AppError::NotFound(format!("Booking {} not found", booking_id)));
        };

        if booking.driver_id != Some(driver.id) {
            return Err(BookingError::NotAssignedDriver(driver.id).into());
        }

        Ok((booking, car))
    }

    async fn customer_email(&self, booking: &Booking) -> Result<String, AppError> {
        match UserRepository::new(self.db)
            .find_by_id(booking.customer_id)
            .await?
        {
            Some(customer) => Ok(customer.email),
            None => Err(AppError::InternalError(format!(
                "Customer {} of booking {} is missing",
                booking.customer_id, booking.id
            ))),
        }
    }
}

/// Final base price and AC charge of a ride.
fn settle(booking: &Booking, car: &Car) -> (i64, i64) {
    match (booking.pricing_mode, booking.actual_distance_km) {
        (PricingMode::PerKm, Some(distance)) => {
            let rates = Rates {
                price_per_day: car.price_per_day,
                price_per_km: car.price_per_km,
            };
            let base = pricing::base_price(PricingMode::PerKm, rates, 1, distance);
            (base, pricing::ac_surcharge(base, booking.ac))
        }
        _ => (booking.base_price, booking.ac_charge),
    }
}

fn require_status(
    booking: &Booking,
    expected: BookingStatus,
    action: &'static str,
) -> Result<(), BookingError> {
    if booking.status != expected {
        return Err(BookingError::InvalidStatus {
            current: booking.status,
            action,
        });
    }
    Ok(())
}

fn check_code(booking: &Booking, unique_code: &str) -> Result<(), BookingError> {
    if booking.unique_code != unique_code.trim() {
        return Err(BookingError::InvalidUniqueCode);
    }
    Ok(())
}
