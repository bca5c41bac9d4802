//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and
//! `helpers` offers shortcuts that create a whole dependency chain at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let owner = factory::user::create_owner(&db).await?;
//!     let car = factory::car::create_car(&db, owner.id).await?;
//!
//!     // Create with all dependencies
//!     let (owner, customer, car, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let car = factory::car::CarFactory::new(&db, owner.id)
//!     .city("Pune")
//!     .price_per_day(2500)
//!     .approval_status("pending")
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod car;
pub mod driver;
pub mod helpers;
pub mod user;

pub use booking::create_booking;
pub use car::create_car;
pub use driver::create_driver;
pub use user::{create_customer, create_owner, create_user};
