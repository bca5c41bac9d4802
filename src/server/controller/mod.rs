//! HTTP handlers grouped by audience.
//!
//! Handlers authenticate through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert request DTOs into server params, call a service and convert the result back
//! into DTOs.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod car;
pub mod driver;
pub mod geocode;
pub mod health;
pub mod owner;
pub mod param;
