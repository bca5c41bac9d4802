//! Domain models for car listings.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::ApprovalStatus,
        car::{CarDto, CarInputDto, PaginatedCarsDto},
    },
    server::{error::AppError, util::parse::parse_stored},
};

const MAX_PRICE_PER_DAY: i64 = 10_000_000;
const MAX_PRICE_PER_KM: i64 = 100_000;

/// Car listed by an owner. Only approved cars are visible to customers.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub city: String,
    pub seats: i32,
    pub fuel_type: String,
    pub transmission: String,
    /// Day rate in whole currency units. Also the minimum charge for per-km bookings.
    pub price_per_day: i64,
    /// Distance rate in whole currency units.
    pub price_per_km: i64,
    pub image_url: Option<String>,
    pub approval_status: ApprovalStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    pub fn from_entity(entity: entity::car::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            brand: entity.brand,
            model: entity.model,
            year: entity.year,
            city: entity.city,
            seats: entity.seats,
            fuel_type: entity.fuel_type,
            transmission: entity.transmission,
            price_per_day: entity.price_per_day,
            price_per_km: entity.price_per_km,
            image_url: entity.image_url,
            approval_status: parse_stored(
                "car.approval_status",
                entity.approval_status,
                ApprovalStatus::parse,
            )?,
            rejection_reason: entity.rejection_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            brand: self.brand,
            model: self.model,
            year: self.year,
            city: self.city,
            seats: self.seats,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            price_per_day: self.price_per_day,
            price_per_km: self.price_per_km,
            image_url: self.image_url,
            approval_status: self.approval_status,
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Listing details supplied by an owner on create and on edit.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDetailsParam {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub city: String,
    pub seats: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub price_per_day: i64,
    pub price_per_km: i64,
    pub image_url: Option<String>,
}

impl CarDetailsParam {
    /// Converts the request DTO, trimming text fields.
    pub fn from_dto(dto: CarInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            brand: dto.brand.trim().to_string(),
            model: dto.model.trim().to_string(),
            year: dto.year,
            city: dto.city.trim().to_string(),
            seats: dto.seats,
            fuel_type: dto.fuel_type.trim().to_lowercase(),
            transmission: dto.transmission.trim().to_lowercase(),
            price_per_day: dto.price_per_day,
            price_per_km: dto.price_per_km,
            image_url: dto.image_url.filter(|url| !url.trim().is_empty()),
        }
    }

    /// Checks the listing for values no car can have.
    ///
    /// # Returns
    /// - `Ok(())` - Listing is valid
    /// - `Err(AppError::BadRequest)` - First failing field with a message
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() || self.brand.is_empty() || self.model.is_empty() {
            return Err(AppError::BadRequest(
                "Name, brand and model are required".to_string(),
            ));
        }
        if self.city.is_empty() {
            return Err(AppError::BadRequest("City is required".to_string()));
        }
        if self.seats <= 0 {
            return Err(AppError::BadRequest("Seats must be positive".to_string()));
        }
        if self.price_per_day <= 0 || self.price_per_km <= 0 {
            return Err(AppError::BadRequest(
                "Prices must be greater than zero".to_string(),
            ));
        }
        if self.price_per_day > MAX_PRICE_PER_DAY || self.price_per_km > MAX_PRICE_PER_KM {
            return Err(AppError::BadRequest(format!(
                "Prices cannot exceed {} per day or {} per km",
                MAX_PRICE_PER_DAY, MAX_PRICE_PER_KM
            )));
        }
        Ok(())
    }
}

/// Paginated collection of cars with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCars {
    pub cars: Vec<Car>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCars {
    pub fn into_dto(self) -> PaginatedCarsDto {
        PaginatedCarsDto {
            cars: self.cars.into_iter().map(Car::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
