use chrono::{Duration, Utc};

use crate::{
    model::{api::ApprovalStatus, user::Role},
    server::{
        data::{driver::DriverRepository, otp::OtpRepository},
        error::{auth::AuthError, AppError},
        model::{
            otp::{CreateOtpParam, OtpPurpose},
            user::RegisterParam,
        },
        service::{
            auth::{password::hash_password, token::TokenService, AuthService},
            mail::Mailer,
        },
    },
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod login;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::hours(1))
}

fn service<'a>(
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    mailer: &'a Mailer,
) -> AuthService<'a> {
    AuthService::new(db, tokens, mailer, Duration::minutes(10))
}

/// Reads the signup passcode the log mailer would have printed.
async fn signup_code(db: &DatabaseConnection, email: &str) -> String {
    OtpRepository::new(db)
        .find_latest(email, OtpPurpose::Signup, None)
        .await
        .unwrap()
        .unwrap()
        .code
}

fn registration(email: &str, role: Role, otp: &str) -> RegisterParam {
    RegisterParam {
        name: "Ravi".to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
        phone: "9876500000".to_string(),
        role,
        otp: otp.to_string(),
        license_number: None,
        city: None,
    }
}
