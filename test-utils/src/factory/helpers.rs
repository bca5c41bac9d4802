//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an approved car listing along with its owner.
///
/// # Returns
/// - `Ok((owner, car))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::car::Model), DbErr> {
    let owner = crate::factory::user::create_owner(db).await?;
    let car = crate::factory::car::create_car(db, owner.id).await?;

    Ok((owner, car))
}

/// Creates a driver user with an approved driver profile in the given city.
///
/// # Returns
/// - `Ok((user, driver))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_approved_driver(
    db: &DatabaseConnection,
    city: &str,
    rating: f64,
) -> Result<(entity::user::Model, entity::driver::Model), DbErr> {
    let user = crate::factory::user::UserFactory::new(db)
        .role("driver")
        .build()
        .await?;
    let driver = crate::factory::driver::DriverFactory::new(db, user.id)
        .city(city)
        .rating(rating)
        .approval_status("approved")
        .build()
        .await?;

    Ok((user, driver))
}

/// Creates a complete booking hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Owner user
/// 2. Customer user
/// 3. Approved car owned by the owner
/// 4. Confirmed booking by the customer without a driver
///
/// # Returns
/// - `Ok((owner, customer, car, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::car::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (owner, car) = create_car_with_owner(db).await?;
    let customer = crate::factory::user::create_customer(db).await?;
    let booking = crate::factory::booking::create_booking(db, customer.id, car.id).await?;

    Ok((owner, customer, car, booking))
}
