//! Car listing repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select,
};

use crate::{
    model::api::ApprovalStatus,
    server::{
        error::AppError,
        model::car::{Car, CarDetailsParam},
    },
};

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a car listing awaiting admin approval.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the owning user
    /// - `param` - Validated listing details
    ///
    /// # Returns
    /// - `Ok(Car)` - The created car in `pending` state
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, owner_id: i32, param: CarDetailsParam) -> Result<Car, AppError> {
        let now = Utc::now();
        let entity = entity::car::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(param.name),
            brand: ActiveValue::Set(param.brand),
            model: ActiveValue::Set(param.model),
            year: ActiveValue::Set(param.year),
            city: ActiveValue::Set(param.city),
            seats: ActiveValue::Set(param.seats),
            fuel_type: ActiveValue::Set(param.fuel_type),
            transmission: ActiveValue::Set(param.transmission),
            price_per_day: ActiveValue::Set(param.price_per_day),
            price_per_km: ActiveValue::Set(param.price_per_km),
            image_url: ActiveValue::Set(param.image_url),
            approval_status: ActiveValue::Set(ApprovalStatus::Pending.as_str().to_string()),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Car::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, AppError> {
        let entity = listed()
            .filter(entity::car::Column::Id.eq(id))
            .one(self.db)
            .await?;

        entity.map(Car::from_entity).transpose()
    }

    /// Replaces the listing details of a car and sends it back to review.
    ///
    /// Any earlier rejection reason is cleared.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - The updated car in `pending` state
    /// - `Ok(None)` - No car with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, id: i32, param: CarDetailsParam) -> Result<Option<Car>, AppError> {
        let Some(entity) = listed()
            .filter(entity::car::Column::Id.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::car::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.brand = ActiveValue::Set(param.brand);
        active.model = ActiveValue::Set(param.model);
        active.year = ActiveValue::Set(param.year);
        active.city = ActiveValue::Set(param.city);
        active.seats = ActiveValue::Set(param.seats);
        active.fuel_type = ActiveValue::Set(param.fuel_type);
        active.transmission = ActiveValue::Set(param.transmission);
        active.price_per_day = ActiveValue::Set(param.price_per_day);
        active.price_per_km = ActiveValue::Set(param.price_per_km);
        active.image_url = ActiveValue::Set(param.image_url);
        active.approval_status = ActiveValue::Set(ApprovalStatus::Pending.as_str().to_string());
        active.rejection_reason = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Car::from_entity(entity).map(Some)
    }

    /// Removes a car from every listing.
    ///
    /// The row is kept so bookings on it still resolve and still count towards revenue.
    ///
    /// # Returns
    /// - `Ok(true)` - Car delisted
    /// - `Ok(false)` - No listed car with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Car::update_many()
            .col_expr(entity::car::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::car::Column::Id.eq(id))
            .filter(entity::car::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every car listed by an owner, most recently updated first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Car>, AppError> {
        let entities = listed()
            .filter(entity::car::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::car::Column::UpdatedAt)
            .order_by_desc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Car::from_entity).collect()
    }

    /// Gets cars with pagination, filtered by approval status and optionally by city.
    ///
    /// # Arguments
    /// - `status` - Only return cars in this approval state when set
    /// - `city` - City match ignoring case and surrounding whitespace when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of cars per page
    ///
    /// # Returns
    /// - `Ok((cars, total))` - Cars for the requested page and total matching count
    /// - `Err(AppError)` - Database error or corrupted status column
    pub async fn get_paginated(
        &self,
        status: Option<ApprovalStatus>,
        city: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Car>, u64), AppError> {
        let mut query = listed();
        if let Some(status) = status {
            query = query.filter(entity::car::Column::ApprovalStatus.eq(status.as_str()));
        }
        if let Some(city) = city {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::car::Column::City)))
                    .eq(city.trim().to_lowercase()),
            );
        }

        let paginator = query
            .order_by_desc(entity::car::Column::CreatedAt)
            .order_by_desc(entity::car::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let cars = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Car::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((cars, total))
    }

    /// Sets the approval status and rejection reason of a car.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - The updated car
    /// - `Ok(None)` - No car with that ID
    pub async fn set_approval(
        &self,
        id: i32,
        status: ApprovalStatus,
        rejection_reason: Option<String>,
    ) -> Result<Option<Car>, AppError> {
        let Some(entity) = listed()
            .filter(entity::car::Column::Id.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::car::ActiveModel = entity.into();
        active.approval_status = ActiveValue::Set(status.as_str().to_string());
        active.rejection_reason = ActiveValue::Set(rejection_reason);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Car::from_entity(entity).map(Some)
    }

    pub async fn count_by_status(&self, status: ApprovalStatus) -> Result<u64, AppError> {
        let count = listed()
            .filter(entity::car::Column::ApprovalStatus.eq(status.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }
}

/// Cars that have not been deleted by their owner.
fn listed() -> Select<entity::car::Entity> {
    entity::prelude::Car::find().filter(entity::car::Column::DeletedAt.is_null())
}
