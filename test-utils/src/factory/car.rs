//! Car factory for creating car listings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating car listings owned by an existing user.
///
/// Cars are approved by default so that they can be booked straight away.
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    city: String,
    price_per_day: i64,
    price_per_km: i64,
    approval_status: String,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Car {id}"`
    /// - city: `"Mumbai"`
    /// - price_per_day: `2000`
    /// - price_per_km: `12`
    /// - approval_status: `"approved"`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            name: format!("Car {}", next_id()),
            city: "Mumbai".to_string(),
            price_per_day: 2000,
            price_per_km: 12,
            approval_status: "approved".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn price_per_day(mut self, price: i64) -> Self {
        self.price_per_day = price;
        self
    }

    pub fn price_per_km(mut self, price: i64) -> Self {
        self.price_per_km = price;
        self
    }

    pub fn approval_status(mut self, status: impl Into<String>) -> Self {
        self.approval_status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        let now = Utc::now();
        entity::car::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            brand: ActiveValue::Set("Maruti".to_string()),
            model: ActiveValue::Set("Swift".to_string()),
            year: ActiveValue::Set(2022),
            city: ActiveValue::Set(self.city),
            seats: ActiveValue::Set(5),
            fuel_type: ActiveValue::Set("petrol".to_string()),
            transmission: ActiveValue::Set("manual".to_string()),
            price_per_day: ActiveValue::Set(self.price_per_day),
            price_per_km: ActiveValue::Set(self.price_per_km),
            image_url: ActiveValue::Set(None),
            approval_status: ActiveValue::Set(self.approval_status),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved car with default values for the given owner.
pub async fn create_car(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, owner_id).build().await
}
