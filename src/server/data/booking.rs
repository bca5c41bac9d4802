//! Booking repository.
//!
//! Besides CRUD, this repository answers the two scheduling questions the booking
//! service asks: whether a car is free for a range and whether a driver is.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    model::booking::BookingStatus,
    server::{
        error::AppError,
        model::{
            booking::{Booking, BookingWithCar, CreateBookingParam},
            car::Car,
        },
    },
};

/// Statuses that hold a car and driver for the booked range.
const ACTIVE_STATUSES: [BookingStatus; 2] = [BookingStatus::Confirmed, BookingStatus::Ongoing];

/// Whose bookings a list query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    All,
    Customer(i32),
    Driver(i32),
    /// Bookings on any car owned by the user.
    Owner(i32),
}

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a priced booking in `confirmed` state.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        let entity = entity::booking::ActiveModel {
            customer_id: ActiveValue::Set(param.customer_id),
            car_id: ActiveValue::Set(param.car_id),
            driver_id: ActiveValue::Set(param.driver_id),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            pricing_mode: ActiveValue::Set(param.pricing_mode.as_str().to_string()),
            ac: ActiveValue::Set(param.ac),
            pickup_lat: ActiveValue::Set(param.pickup.lat),
            pickup_lng: ActiveValue::Set(param.pickup.lng),
            pickup_address: ActiveValue::Set(param.pickup.address),
            drop_lat: ActiveValue::Set(param.drop.lat),
            drop_lng: ActiveValue::Set(param.drop.lng),
            drop_address: ActiveValue::Set(param.drop.address),
            estimated_distance_km: ActiveValue::Set(param.estimated_distance_km),
            base_price: ActiveValue::Set(param.base_price),
            ac_charge: ActiveValue::Set(param.ac_charge),
            total_price: ActiveValue::Set(param.total_price),
            status: ActiveValue::Set(BookingStatus::Confirmed.as_str().to_string()),
            unique_code: ActiveValue::Set(param.unique_code),
            cancellation_fine: ActiveValue::Set(0),
            late_fine: ActiveValue::Set(0),
            actual_distance_km: ActiveValue::Set(None),
            actual_return_date: ActiveValue::Set(None),
            ride_started_at: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        entity.map(Booking::from_entity).transpose()
    }

    /// Finds a booking together with the car it reserves.
    pub async fn find_with_car(&self, id: i32) -> Result<Option<(Booking, Car)>, AppError> {
        let row = entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Car)
            .one(self.db)
            .await?;

        match row {
            Some((booking, Some(car))) => {
                Ok(Some((Booking::from_entity(booking)?, Car::from_entity(car)?)))
            }
            _ => Ok(None),
        }
    }

    /// Checks whether an active booking on the car overlaps the range.
    ///
    /// Ranges are inclusive at both ends, so a booking ending exactly when another
    /// starts still conflicts.
    ///
    /// # Arguments
    /// - `car_id` - Car to check
    /// - `start` - Requested start of the range
    /// - `end` - Requested end of the range
    ///
    /// # Returns
    /// - `Ok(true)` - At least one conflicting booking exists
    /// - `Ok(false)` - The car is free for the range
    pub async fn car_has_overlap(
        &self,
        car_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let count = overlapping(start, end)
            .filter(entity::booking::Column::CarId.eq(car_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the driver is already assigned to an active booking overlapping
    /// the range.
    pub async fn driver_has_overlap(
        &self,
        driver_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let count = overlapping(start, end)
            .filter(entity::booking::Column::DriverId.eq(driver_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the car has any confirmed or ongoing booking, regardless of dates.
    pub async fn car_has_active(&self, car_id: i32) -> Result<bool, AppError> {
        let count = active()
            .filter(entity::booking::Column::CarId.eq(car_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets bookings with their car names, newest first.
    ///
    /// # Arguments
    /// - `scope` - Whose bookings to return
    /// - `status` - Only return bookings in this status when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of bookings per page
    ///
    /// # Returns
    /// - `Ok((bookings, total))` - Bookings for the requested page and total matching count
    /// - `Err(AppError)` - Database error or corrupted column
    pub async fn get_paginated(
        &self,
        scope: BookingScope,
        status: Option<BookingStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<BookingWithCar>, u64), AppError> {
        let mut query = entity::prelude::Booking::find().find_also_related(entity::prelude::Car);

        query = match scope {
            BookingScope::All => query,
            BookingScope::Customer(id) => {
                query.filter(entity::booking::Column::CustomerId.eq(id))
            }
            BookingScope::Driver(id) => query.filter(entity::booking::Column::DriverId.eq(id)),
            BookingScope::Owner(id) => query.filter(entity::car::Column::OwnerId.eq(id)),
        };
        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let bookings = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(booking, car)| {
                Ok(BookingWithCar {
                    booking: Booking::from_entity(booking)?,
                    car_name: car.map(|c| c.name),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok((bookings, total))
    }

    /// Marks a confirmed booking cancelled with the given fine.
    pub async fn cancel(
        &self,
        id: i32,
        fine: i64,
        cancelled_at: DateTime<Utc>,
    ) -> Result<Booking, AppError> {
        self.update_by_id(id, |active| {
            active.status = ActiveValue::Set(BookingStatus::Cancelled.as_str().to_string());
            active.cancellation_fine = ActiveValue::Set(fine);
            active.cancelled_at = ActiveValue::Set(Some(cancelled_at));
        })
        .await
    }

    /// Moves a booking to `ongoing`.
    pub async fn start_ride(
        &self,
        id: i32,
        started_at: DateTime<Utc>,
    ) -> Result<Booking, AppError> {
        self.update_by_id(id, |active| {
            active.status = ActiveValue::Set(BookingStatus::Ongoing.as_str().to_string());
            active.ride_started_at = ActiveValue::Set(Some(started_at));
        })
        .await
    }

    /// Stores the values reported by the driver at the end of a ride.
    ///
    /// The booking stays `ongoing` until the customer confirms completion.
    pub async fn record_ride_end(
        &self,
        id: i32,
        actual_distance_km: Option<f64>,
        actual_return_date: DateTime<Utc>,
    ) -> Result<Booking, AppError> {
        self.update_by_id(id, |active| {
            active.actual_distance_km = ActiveValue::Set(actual_distance_km);
            active.actual_return_date = ActiveValue::Set(Some(actual_return_date));
        })
        .await
    }

    /// Settles a ride and marks the booking `completed`.
    pub async fn complete(
        &self,
        id: i32,
        base_price: i64,
        ac_charge: i64,
        late_fine: i64,
        completed_at: DateTime<Utc>,
    ) -> Result<Booking, AppError> {
        self.update_by_id(id, |active| {
            active.base_price = ActiveValue::Set(base_price);
            active.ac_charge = ActiveValue::Set(ac_charge);
            active.total_price = ActiveValue::Set(base_price.saturating_add(ac_charge));
            active.late_fine = ActiveValue::Set(late_fine);
            active.status = ActiveValue::Set(BookingStatus::Completed.as_str().to_string());
            active.completed_at = ActiveValue::Set(Some(completed_at));
        })
        .await
    }

    pub async fn assign_driver(&self, id: i32, driver_id: i32) -> Result<Booking, AppError> {
        self.update_by_id(id, |active| {
            active.driver_id = ActiveValue::Set(Some(driver_id));
        })
        .await
    }

    pub async fn count_by_status(&self, status: BookingStatus) -> Result<u64, AppError> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Sums settled prices and late fines of completed bookings with fines of
    /// cancelled ones.
    pub async fn revenue(&self) -> Result<i64, AppError> {
        let completed: Vec<(i64, i64)> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::TotalPrice)
            .column(entity::booking::Column::LateFine)
            .filter(entity::booking::Column::Status.eq(BookingStatus::Completed.as_str()))
            .into_tuple()
            .all(self.db)
            .await?;

        let fines: Vec<i64> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::CancellationFine)
            .filter(entity::booking::Column::Status.eq(BookingStatus::Cancelled.as_str()))
            .into_tuple()
            .all(self.db)
            .await?;

        let revenue = completed
            .iter()
            .map(|(total, late)| total.saturating_add(*late))
            .chain(fines)
            .fold(0_i64, i64::saturating_add);

        Ok(revenue)
    }

    async fn update_by_id(
        &self,
        id: i32,
        apply: impl FnOnce(&mut entity::booking::ActiveModel),
    ) -> Result<Booking, AppError> {
        let entity = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        let mut active: entity::booking::ActiveModel = entity.into();
        apply(&mut active);
        let entity = active.update(self.db).await?;

        Booking::from_entity(entity)
    }
}

fn active() -> Select<entity::booking::Entity> {
    entity::prelude::Booking::find().filter(
        entity::booking::Column::Status.is_in(ACTIVE_STATUSES.iter().map(|s| s.as_str())),
    )
}

fn overlapping(start: DateTime<Utc>, end: DateTime<Utc>) -> Select<entity::booking::Entity> {
    active()
        .filter(entity::booking::Column::StartDate.lte(end))
        .filter(entity::booking::Column::EndDate.gte(start))
}
