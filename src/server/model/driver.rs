//! Domain models for driver profiles.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::ApprovalStatus,
        driver::{DriverDto, PaginatedDriversDto},
    },
    server::{error::AppError, model::user::User, util::parse::parse_stored},
};

/// Driver profile attached to a user with the `driver` role.
///
/// Drivers serve bookings in their city. Approval gates both login and assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub user_id: i32,
    pub license_number: String,
    pub city: String,
    /// Average rating, used to rank drivers during assignment.
    pub rating: f64,
    pub approval_status: ApprovalStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    pub fn from_entity(entity: entity::driver::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            license_number: entity.license_number,
            city: entity.city,
            rating: entity.rating,
            approval_status: parse_stored(
                "driver.approval_status",
                entity.approval_status,
                ApprovalStatus::parse,
            )?,
            rejection_reason: entity.rejection_reason,
            created_at: entity.created_at,
        })
    }

    /// Converts to a DTO, enriched with the contact details of the driver's user.
    pub fn into_dto(self, user: &User) -> DriverDto {
        DriverDto {
            id: self.id,
            user_id: self.user_id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            license_number: self.license_number,
            city: self.city,
            rating: self.rating,
            approval_status: self.approval_status,
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a pending driver profile during registration.
#[derive(Debug, Clone)]
pub struct CreateDriverParam {
    pub user_id: i32,
    pub license_number: String,
    pub city: String,
}

/// Paginated collection of drivers with their user accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDrivers {
    pub drivers: Vec<(Driver, User)>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedDrivers {
    pub fn into_dto(self) -> PaginatedDriversDto {
        PaginatedDriversDto {
            drivers: self
                .drivers
                .into_iter()
                .map(|(driver, user)| driver.into_dto(&user))
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
