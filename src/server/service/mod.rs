//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Pricing, fines, approval rules and the ride lifecycle
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod auth;
pub mod booking;
pub mod car;
pub mod geocode;
pub mod mail;
pub mod otp;
pub mod ride;

#[cfg(test)]
mod test;
