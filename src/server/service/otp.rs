//! One-time passcode issuing and verification.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::otp::OtpRepository,
    error::{auth::AuthError, AppError},
    model::otp::{CreateOtpParam, OtpPurpose},
    util::code::random_digits,
};

const OTP_LENGTH: usize = 6;
/// Wrong guesses allowed before a code is discarded.
pub const MAX_OTP_ATTEMPTS: i32 = 5;

pub struct OtpService<'a> {
    db: &'a DatabaseConnection,
    ttl: Duration,
}

impl<'a> OtpService<'a> {
    pub fn new(db: &'a DatabaseConnection, ttl: Duration) -> Self {
        Self { db, ttl }
    }

    /// Generates and stores a new passcode, replacing any earlier one for the same
    /// email, purpose and booking.
    ///
    /// # Returns
    /// - `Ok(String)` - The passcode to deliver
    /// - `Err(AppError)` - Database error
    pub async fn issue(
        &self,
        email: &str,
        purpose: OtpPurpose,
        booking_id: Option<i32>,
    ) -> Result<String, AppError> {
        let code = random_digits(OTP_LENGTH);

        OtpRepository::new(self.db)
            .replace(CreateOtpParam {
                email: email.to_string(),
                purpose,
                code: code.clone(),
                booking_id,
                expires_at: Utc::now() + self.ttl,
            })
            .await?;

        Ok(code)
    }

    /// Checks a passcode and consumes it on success.
    ///
    /// A wrong code leaves the stored one in place so the user can retry, until
    /// `MAX_OTP_ATTEMPTS` wrong guesses discard it. An expired code is deleted.
    ///
    /// # Returns
    /// - `Ok(())` - Code matched and was consumed
    /// - `Err(AuthError::InvalidOtp)` - No code stored or code does not match
    /// - `Err(AuthError::OtpExpired)` - Code matched but expired
    pub async fn verify_and_consume(
        &self,
        email: &str,
        purpose: OtpPurpose,
        booking_id: Option<i32>,
        code: &str,
    ) -> Result<(), AppError> {
        let repo = OtpRepository::new(self.db);

        let Some(otp) = repo.find_latest(email, purpose, booking_id).await? else {
            return Err(AuthError::InvalidOtp.into());
        };

        if otp.code != code.trim() {
            let attempts = repo
                .record_failed_attempt(otp.id)
                .await?
                .unwrap_or(MAX_OTP_ATTEMPTS);
            if attempts >= MAX_OTP_ATTEMPTS {
                repo.delete(otp.id).await?;
                tracing::warn!(
                    "Discarded {} OTP for {} after {} wrong attempts",
                    purpose.as_str(),
                    email,
                    attempts
                );
            }
            return Err(AuthError::InvalidOtp.into());
        }

        repo.delete(otp.id).await?;

        if otp.is_expired(Utc::now()) {
            return Err(AuthError::OtpExpired.into());
        }

        Ok(())
    }
}
