//! Driver profile repository.
//!
//! Drivers are looked up by user for authentication, by city for assignment and by
//! approval status for the admin review queue.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::api::ApprovalStatus,
    server::{
        error::AppError,
        model::{
            driver::{CreateDriverParam, Driver},
            user::User,
        },
    },
};

pub struct DriverRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a driver profile in `pending` state with no rating yet.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The created profile
    /// - `Err(AppError::DbErr)` - Database error, including a second profile for one user
    pub async fn create(&self, param: CreateDriverParam) -> Result<Driver, AppError> {
        let entity = entity::driver::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            license_number: ActiveValue::Set(param.license_number),
            city: ActiveValue::Set(param.city),
            rating: ActiveValue::Set(0.0),
            approval_status: ActiveValue::Set(ApprovalStatus::Pending.as_str().to_string()),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Driver::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Driver>, AppError> {
        let entity = entity::prelude::Driver::find_by_id(id).one(self.db).await?;

        entity.map(Driver::from_entity).transpose()
    }

    /// Finds the driver profile belonging to a user.
    ///
    /// # Returns
    /// - `Ok(Some(Driver))` - The user's profile
    /// - `Ok(None)` - The user has no driver profile
    /// - `Err(AppError)` - Database error or corrupted status column
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Driver>, AppError> {
        let entity = entity::prelude::Driver::find()
            .filter(entity::driver::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(Driver::from_entity).transpose()
    }

    /// Finds a driver profile together with its user account.
    pub async fn find_with_user(&self, id: i32) -> Result<Option<(Driver, User)>, AppError> {
        let row = entity::prelude::Driver::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        match row {
            Some((driver, Some(user))) => {
                Ok(Some((Driver::from_entity(driver)?, User::from_entity(user)?)))
            }
            _ => Ok(None),
        }
    }

    /// Gets approved drivers in a city, best rated first.
    ///
    /// Ties on rating are broken by ID so assignment is deterministic.
    ///
    /// # Arguments
    /// - `city` - City to match, ignoring case and surrounding whitespace
    ///
    /// # Returns
    /// - `Ok(Vec<Driver>)` - Candidate drivers in assignment order
    /// - `Err(AppError)` - Database error or corrupted status column
    pub async fn get_approved_by_city(&self, city: &str) -> Result<Vec<Driver>, AppError> {
        let entities = entity::prelude::Driver::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::driver::Column::City)))
                    .eq(city.trim().to_lowercase()),
            )
            .filter(entity::driver::Column::ApprovalStatus.eq(ApprovalStatus::Approved.as_str()))
            .order_by_desc(entity::driver::Column::Rating)
            .order_by_asc(entity::driver::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Driver::from_entity).collect()
    }

    /// Gets drivers with their user accounts, optionally filtered by approval status.
    ///
    /// Oldest profiles come first so the review queue is processed in arrival order.
    ///
    /// # Returns
    /// - `Ok((drivers, total))` - Drivers for the requested page and total matching count
    /// - `Err(AppError)` - Database error or corrupted column
    pub async fn get_by_status_paginated(
        &self,
        status: Option<ApprovalStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(Driver, User)>, u64), AppError> {
        let mut query = entity::prelude::Driver::find();
        if let Some(status) = status {
            query = query.filter(entity::driver::Column::ApprovalStatus.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::driver::Column::CreatedAt)
            .order_by_asc(entity::driver::Column::Id)
            .find_also_related(entity::prelude::User)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let mut drivers = Vec::new();
        for (driver, user) in paginator.fetch_page(page).await? {
            let Some(user) = user else {
                continue;
            };
            drivers.push((Driver::from_entity(driver)?, User::from_entity(user)?));
        }

        Ok((drivers, total))
    }

    /// Sets the approval status and rejection reason of a driver.
    ///
    /// # Returns
    /// - `Ok(Some(Driver))` - The updated profile
    /// - `Ok(None)` - No driver with that ID
    /// - `Err(AppError)` - Database error
    pub async fn set_approval(
        &self,
        id: i32,
        status: ApprovalStatus,
        rejection_reason: Option<String>,
    ) -> Result<Option<Driver>, AppError> {
        let Some(entity) = entity::prelude::Driver::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::driver::ActiveModel = entity.into();
        active.approval_status = ActiveValue::Set(status.as_str().to_string());
        active.rejection_reason = ActiveValue::Set(rejection_reason);
        let entity = active.update(self.db).await?;

        Driver::from_entity(entity).map(Some)
    }

    pub async fn count_by_status(&self, status: ApprovalStatus) -> Result<u64, AppError> {
        let count = entity::prelude::Driver::find()
            .filter(entity::driver::Column::ApprovalStatus.eq(status.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
