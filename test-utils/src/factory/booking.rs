//! Booking factory for creating bookings between existing customers and cars.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating bookings with customizable dates, status and driver.
///
/// Defaults to a confirmed two-day per-day booking starting three days from now.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    car_id: i32,
    driver_id: Option<i32>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    pricing_mode: String,
    status: String,
    unique_code: String,
    total_price: i64,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, customer_id: i32, car_id: i32) -> Self {
        let start_date = Utc::now() + Duration::days(3);
        Self {
            db,
            customer_id,
            car_id,
            driver_id: None,
            start_date,
            end_date: start_date + Duration::days(2),
            pricing_mode: "perDay".to_string(),
            status: "confirmed".to_string(),
            unique_code: "123456".to_string(),
            total_price: 4000,
        }
    }

    pub fn driver_id(mut self, driver_id: i32) -> Self {
        self.driver_id = Some(driver_id);
        self
    }

    pub fn dates(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn pricing_mode(mut self, mode: impl Into<String>) -> Self {
        self.pricing_mode = mode.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn unique_code(mut self, code: impl Into<String>) -> Self {
        self.unique_code = code.into();
        self
    }

    pub fn total_price(mut self, total_price: i64) -> Self {
        self.total_price = total_price;
        self
    }

    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            car_id: ActiveValue::Set(self.car_id),
            driver_id: ActiveValue::Set(self.driver_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            pricing_mode: ActiveValue::Set(self.pricing_mode),
            ac: ActiveValue::Set(false),
            pickup_lat: ActiveValue::Set(19.076),
            pickup_lng: ActiveValue::Set(72.8777),
            pickup_address: ActiveValue::Set(None),
            drop_lat: ActiveValue::Set(18.5204),
            drop_lng: ActiveValue::Set(73.8567),
            drop_address: ActiveValue::Set(None),
            estimated_distance_km: ActiveValue::Set(120.0),
            base_price: ActiveValue::Set(self.total_price),
            ac_charge: ActiveValue::Set(0),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            unique_code: ActiveValue::Set(self.unique_code),
            cancellation_fine: ActiveValue::Set(0),
            late_fine: ActiveValue::Set(0),
            actual_distance_km: ActiveValue::Set(None),
            actual_return_date: ActiveValue::Set(None),
            ride_started_at: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    customer_id: i32,
    car_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, customer_id, car_id).build().await
}
