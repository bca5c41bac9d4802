use chrono::{DateTime, Utc};

use crate::{
    model::booking::BookingStatus,
    server::{
        data::{booking::BookingRepository, driver::DriverRepository},
        error::{booking::BookingError, AppError},
        model::{booking::Booking, driver::Driver},
    },
};

use super::BookingService;

impl<'a> BookingService<'a> {
    /// Picks the best rated approved driver in the city who is free for the range.
    ///
    /// Candidates are tried in rating order and the first without an overlapping
    /// active booking wins.
    ///
    /// # Returns
    /// - `Ok(Some(Driver))` - A free driver
    /// - `Ok(None)` - Every driver in the city is busy, or there are none
    pub async fn find_available_driver(
        &self,
        city: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<Driver>, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let candidates = DriverRepository::new(self.db)
            .get_approved_by_city(city)
            .await?;

        for driver in candidates {
            if !booking_repo.driver_has_overlap(driver.id, start, end).await? {
                return Ok(Some(driver));
            }
        }

        Ok(None)
    }

    /// Assigns a driver to a confirmed booking that has none.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking with its new driver
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(BookingError::InvalidStatus)` - Booking is not confirmed
    /// - `Err(AppError::Conflict)` - Booking already has a driver or no driver is free
    pub async fn assign_driver(&self, booking_id: i32) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let Some((booking, car)) = booking_repo.find_with_car(booking_id).await? else {
            return Err(AppError::NotFound(format!("Booking {} not found", booking_id)));
        };

        if booking.status != BookingStatus::Confirmed {
            return Err(BookingError::InvalidStatus {
                current: booking.status,
                action: "assign a driver",
            }
            .into());
        }
        if booking.driver_id.is_some() {
            return Err(AppError::Conflict("Booking already has a driver".to_string()));
        }

        let Some(driver) = self
            .find_available_driver(&car.city, booking.start_date, booking.end_date)
            .await?
        else {
            return Err(AppError::Conflict(format!(
                "No driver available in {} for these dates",
                car.city
            )));
        };

        let booking = booking_repo.assign_driver(booking.id, driver.id).await?;
        tracing::info!("Assigned driver {} to booking {}", driver.id, booking.id);

        Ok(booking)
    }
}
