//! SeaORM entities for the car rental marketplace.

pub mod prelude;

pub mod booking;
pub mod car;
pub mod driver;
pub mod otp;
pub mod user;
