//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Text columns holding enum values are parsed at this boundary, so a corrupted row surfaces
//! as an internal error instead of leaking into the services.

pub mod booking;
pub mod car;
pub mod driver;
pub mod otp;
pub mod user;
