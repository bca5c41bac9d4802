//! Car listing service for owners and the public catalogue.

use sea_orm::DatabaseConnection;

use crate::{
    model::{api::ApprovalStatus, user::Role},
    server::{
        data::{booking::BookingRepository, car::CarRepository},
        error::AppError,
        model::{
            car::{Car, CarDetailsParam, PaginatedCars},
            user::User,
        },
    },
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a car for review.
    ///
    /// # Returns
    /// - `Ok(Car)` - The new car in `pending` state
    /// - `Err(AppError::BadRequest)` - Listing failed validation
    pub async fn create(&self, owner_id: i32, param: CarDetailsParam) -> Result<Car, AppError> {
        param.validate()?;

        let car = CarRepository::new(self.db).create(owner_id, param).await?;
        tracing::info!("Owner {} listed car {} for review", owner_id, car.id);

        Ok(car)
    }

    pub async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<Car>, AppError> {
        CarRepository::new(self.db).get_by_owner(owner_id).await
    }

    /// Replaces the details of an owner's car, which sends it back to review.
    ///
    /// # Returns
    /// - `Ok(Car)` - The updated car in `pending` state
    /// - `Err(AppError::NotFound)` - Car missing or owned by someone else
    /// - `Err(AppError::BadRequest)` - Listing failed validation
    pub async fn update(
        &self,
        owner_id: i32,
        car_id: i32,
        param: CarDetailsParam,
    ) -> Result<Car, AppError> {
        param.validate()?;
        self.owned_car(owner_id, car_id).await?;

        CarRepository::new(self.db)
            .update(car_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car {} not found", car_id)))
    }

    /// Deletes an owner's car unless it has confirmed or ongoing bookings.
    ///
    /// # Returns
    /// - `Ok(())` - Car deleted
    /// - `Err(AppError::NotFound)` - Car missing or owned by someone else
    /// - `Err(AppError::Conflict)` - Car has active bookings
    pub async fn delete(&self, owner_id: i32, car_id: i32) -> Result<(), AppError> {
        self.owned_car(owner_id, car_id).await?;

        if BookingRepository::new(self.db)
            .car_has_active(car_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Car has active bookings and cannot be deleted".to_string(),
            ));
        }

        CarRepository::new(self.db).delete(car_id).await?;
        tracing::info!("Owner {} deleted car {}", owner_id, car_id);

        Ok(())
    }

    /// Lists approved cars, optionally in one city.
    pub async fn list_approved(
        &self,
        city: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedCars, AppError> {
        let (cars, total) = CarRepository::new(self.db)
            .get_paginated(Some(ApprovalStatus::Approved), city, page, per_page)
            .await?;

        Ok(PaginatedCars {
            cars,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Gets a car if the viewer may see it.
    ///
    /// Approved cars are public. Other cars are only visible to their owner and admins.
    ///
    /// # Returns
    /// - `Ok(Car)` - The car
    /// - `Err(AppError::NotFound)` - Car missing or hidden from the viewer
    pub async fn get_for_viewer(
        &self,
        car_id: i32,
        viewer: Option<&User>,
    ) -> Result<Car, AppError> {
        let car = CarRepository::new(self.db)
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car {} not found", car_id)))?;

        let privileged =
            viewer.is_some_and(|user| user.role == Role::Admin || user.id == car.owner_id);
        if car.approval_status != ApprovalStatus::Approved && !privileged {
            return Err(AppError::NotFound(format!("Car {} not found", car_id)));
        }

        Ok(car)
    }

    async fn owned_car(&self, owner_id: i32, car_id: i32) -> Result<Car, AppError> {
        match CarRepository::new(self.db).find_by_id(car_id).await? {
            Some(car) if car.owner_id == owner_id => Ok(car),
            _ => Err(AppError::NotFound(format!("Car {} not found", car_id))),
        }
    }
}
