//! OTP record repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::otp::{CreateOtpParam, Otp, OtpPurpose},
};

pub struct OtpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new OTP, removing any earlier one for the same email, purpose and booking.
    ///
    /// # Returns
    /// - `Ok(Otp)` - The stored OTP
    /// - `Err(AppError::DbErr)` - Database error during delete or insert
    pub async fn replace(&self, param: CreateOtpParam) -> Result<Otp, AppError> {
        self.delete_for(&param.email, param.purpose, param.booking_id)
            .await?;

        let entity = entity::otp::ActiveModel {
            email: ActiveValue::Set(param.email),
            purpose: ActiveValue::Set(param.purpose.as_str().to_string()),
            code: ActiveValue::Set(param.code),
            attempts: ActiveValue::Set(0),
            booking_id: ActiveValue::Set(param.booking_id),
            expires_at: ActiveValue::Set(param.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Otp::from_entity(entity)
    }

    /// Finds the latest OTP for an email, purpose and booking.
    pub async fn find_latest(
        &self,
        email: &str,
        purpose: OtpPurpose,
        booking_id: Option<i32>,
    ) -> Result<Option<Otp>, AppError> {
        let mut query = entity::prelude::Otp::find()
            .filter(entity::otp::Column::Email.eq(email))
            .filter(entity::otp::Column::Purpose.eq(purpose.as_str()));
        query = match booking_id {
            Some(id) => query.filter(entity::otp::Column::BookingId.eq(id)),
            None => query.filter(entity::otp::Column::BookingId.is_null()),
        };

        let entity = query
            .order_by_desc(entity::otp::Column::CreatedAt)
            .order_by_desc(entity::otp::Column::Id)
            .one(self.db)
            .await?;

        entity.map(Otp::from_entity).transpose()
    }

    /// Records a wrong guess against an OTP.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Attempts made so far, including this one
    /// - `Ok(None)` - No OTP with that ID
    pub async fn record_failed_attempt(&self, id: i32) -> Result<Option<i32>, AppError> {
        let Some(entity) = entity::prelude::Otp::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let attempts = entity.attempts.saturating_add(1);
        let mut active: entity::otp::ActiveModel = entity.into();
        active.attempts = ActiveValue::Set(attempts);
        active.update(self.db).await?;

        Ok(Some(attempts))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Otp::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Removes every OTP for an email, purpose and booking.
    pub async fn delete_for(
        &self,
        email: &str,
        purpose: OtpPurpose,
        booking_id: Option<i32>,
    ) -> Result<u64, AppError> {
        let mut query = entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::Email.eq(email))
            .filter(entity::otp::Column::Purpose.eq(purpose.as_str()));
        query = match booking_id {
            Some(id) => query.filter(entity::otp::Column::BookingId.eq(id)),
            None => query.filter(entity::otp::Column::BookingId.is_null()),
        };

        Ok(query.exec(self.db).await?.rows_affected)
    }

    /// Deletes OTPs that expired at or before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted records
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
