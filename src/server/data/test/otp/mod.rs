use chrono::{Duration, Utc};

use crate::server::{
    data::otp::OtpRepository,
    error::AppError,
    model::otp::{CreateOtpParam, OtpPurpose},
};
use test_utils::builder::TestBuilder;

mod delete_expired;
mod replace;

fn signup(email: &str, code: &str, ttl: Duration) -> CreateOtpParam {
    CreateOtpParam {
        email: email.to_string(),
        purpose: OtpPurpose::Signup,
        code: code.to_string(),
        booking_id: None,
        expires_at: Utc::now() + ttl,
    }
}
