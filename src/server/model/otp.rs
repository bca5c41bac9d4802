//! One-time password records.

use chrono::{DateTime, Utc};

use crate::server::{error::AppError, util::parse::parse_stored};

/// What an OTP authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    /// Proves ownership of an email before registration.
    Signup,
    /// Customer confirmation that a ride has ended.
    RideCompletion,
}

impl OtpPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::RideCompletion => "ride_completion",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "signup" => Some(Self::Signup),
            "ride_completion" => Some(Self::RideCompletion),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Otp {
    pub id: i32,
    pub email: String,
    pub purpose: OtpPurpose,
    pub code: String,
    /// Wrong guesses made against this code so far.
    pub attempts: i32,
    /// Set for ride completion codes.
    pub booking_id: Option<i32>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Otp {
    pub fn from_entity(entity: entity::otp::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            purpose: parse_stored("otp.purpose", entity.purpose, OtpPurpose::parse)?,
            code: entity.code,
            attempts: entity.attempts,
            booking_id: entity.booking_id,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone)]
pub struct CreateOtpParam {
    pub email: String,
    pub purpose: OtpPurpose,
    pub code: String,
    pub booking_id: Option<i32>,
    pub expires_at: DateTime<Utc>,
}
