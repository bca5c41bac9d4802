use super::*;

/// Tests platform counts and revenue.
///
/// Expected: counts per role and status, revenue of completed totals with late fines
/// plus cancellation fines
#[tokio::test]
async fn counts_and_totals_revenue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
    factory::car::CarFactory::new(db, owner.id)
        .approval_status("pending")
        .build()
        .await?;
    let customer = factory::user::create_customer(db).await?;
    factory::helpers::create_approved_driver(db, "Mumbai", 4.0).await?;

    factory::booking::BookingFactory::new(db, customer.id, car.id)
        .status("completed")
        .total_price(2500)
        .build()
        .await?;
    factory::booking::create_booking(db, customer.id, car.id).await?;

    let stats = AdminService::new(db).stats().await?;

    assert_eq!(stats.users.customers, 1);
    assert_eq!(stats.users.owners, 1);
    assert_eq!(stats.users.drivers, 1);
    assert_eq!(stats.users.admins, 0);
    assert_eq!(stats.cars.approved, 1);
    assert_eq!(stats.cars.pending, 1);
    assert_eq!(stats.drivers.approved, 1);
    assert_eq!(stats.bookings.completed, 1);
    assert_eq!(stats.bookings.confirmed, 1);
    assert_eq!(stats.revenue, 2500);

    Ok(())
}
