//! Email and password authentication.
//!
//! Registration is gated by a signup passcode sent to the email address. Login issues a
//! bearer token, except to drivers whose profile is not approved yet.
//!
//! - `token` - HS256 token issuing and verification
//! - `password` - Argon2 hashing
//! - `register` - Signup passcode and account creation
//! - `login` - Credential checks and the current user view

pub mod login;
pub mod password;
pub mod register;
pub mod token;

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::service::{auth::token::TokenService, mail::Mailer};

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
    pub mailer: &'a Mailer,
    pub otp_ttl: Duration,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        mailer: &'a Mailer,
        otp_ttl: Duration,
    ) -> Self {
        Self {
            db,
            tokens,
            mailer,
            otp_ttl,
        }
    }
}
