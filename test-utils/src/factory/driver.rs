//! Driver factory for creating driver profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating driver profiles attached to an existing user.
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    license_number: String,
    city: String,
    rating: f64,
    approval_status: String,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory with default values.
    ///
    /// Defaults:
    /// - license_number: `"DL-{id}"`
    /// - city: `"Mumbai"`
    /// - rating: `4.0`
    /// - approval_status: `"pending"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            license_number: format!("DL-{}", next_id()),
            city: "Mumbai".to_string(),
            rating: 4.0,
            approval_status: "pending".to_string(),
        }
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn approval_status(mut self, status: impl Into<String>) -> Self {
        self.approval_status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        entity::driver::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            license_number: ActiveValue::Set(self.license_number),
            city: ActiveValue::Set(self.city),
            rating: ActiveValue::Set(self.rating),
            approval_status: ActiveValue::Set(self.approval_status),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending driver profile for the given user.
pub async fn create_driver(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db, user_id).build().await
}
