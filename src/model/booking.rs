use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMode {
    #[serde(rename = "perDay")]
    PerDay,
    #[serde(rename = "perKm")]
    PerKm,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerDay => "perDay",
            Self::PerKm => "perKm",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "perDay" => Some(Self::PerDay),
            "perKm" => Some(Self::PerKm),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Ongoing,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "confirmed" => Some(Self::Confirmed),
            "ongoing" => Some(Self::Ongoing),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateBookingDto {
    pub car_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub pricing_mode: PricingMode,
    #[serde(default)]
    pub ac: bool,
    pub pickup: LocationDto,
    pub drop: LocationDto,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct QuoteDto {
    pub days: i64,
    pub estimated_distance_km: f64,
    pub base_price: i64,
    pub ac_charge: i64,
    pub total_price: i64,
    pub available: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BookingDto {
    pub id: i32,
    pub customer_id: i32,
    pub car_id: i32,
    pub car_name: Option<String>,
    pub driver_id: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub pricing_mode: PricingMode,
    pub ac: bool,
    pub pickup: LocationDto,
    pub drop: LocationDto,
    pub estimated_distance_km: f64,
    pub base_price: i64,
    pub ac_charge: i64,
    pub total_price: i64,
    pub status: BookingStatus,
    /// Only shown to the booking's customer and to admins.
    pub unique_code: Option<String>,
    pub cancellation_fine: i64,
    pub late_fine: i64,
    pub actual_distance_km: Option<f64>,
    pub actual_return_date: Option<DateTime<Utc>>,
    pub ride_started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaginatedBookingsDto {
    pub bookings: Vec<BookingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct StartRideDto {
    pub unique_code: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct EndRideDto {
    pub unique_code: String,
    /// Required for per-km bookings.
    pub actual_distance_km: Option<f64>,
    /// Defaults to the time of the request.
    pub actual_return_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CompleteRideDto {
    pub otp: String,
}
