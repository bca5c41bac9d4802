//! Query string parameters shared by list endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::{api::ApprovalStatus, booking::BookingStatus, user::Role};

const DEFAULT_PER_PAGE: u64 = 10;
const MAX_PER_PAGE: u64 = 100;

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

/// Clamps a requested page size to `1..=100`.
pub fn page_size(per_page: u64) -> u64 {
    per_page.clamp(1, MAX_PER_PAGE)
}

#[derive(Deserialize)]
pub struct CarListParams {
    pub city: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

#[derive(Deserialize)]
pub struct ApprovalListParams {
    pub status: Option<ApprovalStatus>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

#[derive(Deserialize)]
pub struct BookingListParams {
    pub status: Option<BookingStatus>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

#[derive(Deserialize)]
pub struct UserListParams {
    pub role: Option<Role>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

#[derive(Deserialize)]
pub struct AvailabilityParams {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct GeocodeParams {
    #[serde(default)]
    pub q: String,
}
