use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::ApprovalStatus;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct DriverDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub city: String,
    pub rating: f64,
    pub approval_status: ApprovalStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedDriversDto {
    pub drivers: Vec<DriverDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
