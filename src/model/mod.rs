//! Request and response DTOs for the REST API.
//!
//! These types define the JSON contract with the frontend. Server-side domain models
//! convert into them at the controller boundary.

pub mod admin;
pub mod api;
pub mod auth;
pub mod booking;
pub mod car;
pub mod driver;
pub mod geocode;
pub mod user;
