use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::ApprovalStatus;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CarDto {
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
    pub price_per_day: i64,
    pub price_per_km: i64,
    pub image_url: Option<String>,
    pub approval_status: ApprovalStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for creating a car and for editing one. Edits replace every field.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CarInputDto {
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

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedCarsDto {
    pub cars: Vec<CarDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AvailabilityDto {
    pub available: bool,
}
