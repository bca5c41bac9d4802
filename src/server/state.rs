//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection is a pool,
//! `reqwest::Client` is reference counted, and the token service and mailer hold only
//! small owned values.

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::service::{auth::token::TokenService, mail::Mailer};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// Outbound HTTP client, used for geocoding and the mail relay.
    pub http_client: reqwest::Client,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    pub mailer: Mailer,

    /// Lifetime of signup and ride completion passcodes.
    pub otp_ttl: Duration,

    /// Base URL of the Nominatim instance behind `/api/geocode`.
    pub nominatim_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        tokens: TokenService,
        mailer: Mailer,
        otp_ttl: Duration,
        nominatim_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            tokens,
            mailer,
            otp_ttl,
            nominatim_url,
        }
    }
}
