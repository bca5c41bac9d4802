//! Admin service for approvals, oversight lists and platform statistics.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        admin::{ApprovalCountsDto, BookingCountsDto, StatsDto, UserCountsDto},
        api::ApprovalStatus,
        booking::BookingStatus,
        user::Role,
    },
    server::{
        data::{
            booking::BookingRepository, car::CarRepository, driver::DriverRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            car::{Car, PaginatedCars},
            driver::{Driver, PaginatedDrivers},
            user::{normalize_email, CreateUserParam, PaginatedUsers, User},
        },
        service::auth::password::hash_password,
    },
};

/// Outcome an admin picks for a pending car or driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Review {
    Approve,
    Reject { reason: Option<String> },
}

impl Review {
    fn into_parts(self) -> (ApprovalStatus, Option<String>) {
        match self {
            Self::Approve => (ApprovalStatus::Approved, None),
            Self::Reject { reason } => (
                ApprovalStatus::Rejected,
                reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty()),
            ),
        }
    }
}

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists cars for review, newest first.
    pub async fn list_cars(
        &self,
        status: Option<ApprovalStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedCars, AppError> {
        let (cars, total) = CarRepository::new(self.db)
            .get_paginated(status, None, page, per_page)
            .await?;

        Ok(PaginatedCars {
            cars,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Approves or rejects a pending car.
    ///
    /// # Returns
    /// - `Ok(Car)` - The reviewed car
    /// - `Err(AppError::NotFound)` - Car does not exist
    /// - `Err(AppError::Conflict)` - Car is not pending
    pub async fn review_car(&self, car_id: i32, review: Review) -> Result<Car, AppError> {
        let repo = CarRepository::new(self.db);
        let car = repo
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car {} not found", car_id)))?;
        require_pending(car.approval_status, "Car")?;

        let (status, reason) = review.into_parts();
        let car = repo
            .set_approval(car_id, status, reason)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car {} not found", car_id)))?;
        tracing::info!("Car {} reviewed as {}", car.id, status.as_str());

        Ok(car)
    }

    pub async fn list_drivers(
        &self,
        status: Option<ApprovalStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedDrivers, AppError> {
        let (drivers, total) = DriverRepository::new(self.db)
            .get_by_status_paginated(status, page, per_page)
            .await?;

        Ok(PaginatedDrivers {
            drivers,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Approves or rejects a pending driver.
    ///
    /// # Returns
    /// - `Ok((Driver, User))` - The reviewed driver and their account
    /// - `Err(AppError::NotFound)` - Driver does not exist
    /// - `Err(AppError::Conflict)` - Driver is not pending
    pub async fn review_driver(
        &self,
        driver_id: i32,
        review: Review,
    ) -> Result<(Driver, User), AppError> {
        let repo = DriverRepository::new(self.db);
        let (driver, user) = repo
            .find_with_user(driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", driver_id)))?;
        require_pending(driver.approval_status, "Driver")?;

        let (status, reason) = review.into_parts();
        let driver = repo
            .set_approval(driver.id, status, reason)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", driver_id)))?;
        tracing::info!("Driver {} reviewed as {}", driver.id, status.as_str());

        Ok((driver, user))
    }

    pub async fn list_users(
        &self,
        role: Option<Role>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(role, page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Counts users, cars, drivers and bookings, and totals the revenue.
    pub async fn stats(&self) -> Result<StatsDto, AppError> {
        let user_repo = UserRepository::new(self.db);
        let car_repo = CarRepository::new(self.db);
        let driver_repo = DriverRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        let users = UserCountsDto {
            customers: user_repo.count_by_role(Role::Customer).await?,
            owners: user_repo.count_by_role(Role::Owner).await?,
            drivers: user_repo.count_by_role(Role::Driver).await?,
            admins: user_repo.count_by_role(Role::Admin).await?,
        };
        let cars = ApprovalCountsDto {
            pending: car_repo.count_by_status(ApprovalStatus::Pending).await?,
            approved: car_repo.count_by_status(ApprovalStatus::Approved).await?,
            rejected: car_repo.count_by_status(ApprovalStatus::Rejected).await?,
        };
        let drivers = ApprovalCountsDto {
            pending: driver_repo.count_by_status(ApprovalStatus::Pending).await?,
            approved: driver_repo.count_by_status(ApprovalStatus::Approved).await?,
            rejected: driver_repo.count_by_status(ApprovalStatus::Rejected).await?,
        };
        let bookings = BookingCountsDto {
            confirmed: booking_repo.count_by_status(BookingStatus::Confirmed).await?,
            ongoing: booking_repo.count_by_status(BookingStatus::Ongoing).await?,
            completed: booking_repo.count_by_status(BookingStatus::Completed).await?,
            cancelled: booking_repo.count_by_status(BookingStatus::Cancelled).await?,
        };

        Ok(StatsDto {
            users,
            cars,
            drivers,
            bookings,
            revenue: booking_repo.revenue().await?,
        })
    }

    /// Creates the configured admin account when no admin exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin account created
    /// - `Ok(None)` - An admin already exists, or the email is taken by another role
    pub async fn seed_admin(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);
        if repo.admin_exists().await? {
            return Ok(None);
        }

        let email = normalize_email(email);
        if repo.email_exists(&email).await? {
            tracing::warn!(
                "Cannot seed admin, email {} belongs to an existing account",
                email
            );
            return Ok(None);
        }

        let admin = repo
            .create(CreateUserParam {
                name: "Admin".to_string(),
                email,
                password_hash: hash_password(password)?,
                phone: String::new(),
                role: Role::Admin,
            })
            .await?;
        tracing::info!("Seeded admin account {}", admin.email);

        Ok(Some(admin))
    }
}

fn require_pending(status: ApprovalStatus, what: &str) -> Result<(), AppError> {
    if status != ApprovalStatus::Pending {
        return Err(AppError::Conflict(format!(
            "{} is already {}",
            what,
            status.as_str()
        )));
    }
    Ok(())
}
