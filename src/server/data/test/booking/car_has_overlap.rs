use super::*;

/// Tests that an active booking blocks an overlapping range.
///
/// Expected: Ok(true) for a range that starts inside the booking
#[tokio::test]
async fn detects_overlapping_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, car, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let start = booking.start_date + Duration::hours(12);

    assert!(
        repo.car_has_overlap(car.id, start, start + Duration::days(3))
            .await?
    );

    Ok(())
}

/// Tests that touching ranges conflict because both ends are inclusive.
///
/// Expected: Ok(true) when the request starts exactly at the booking's end
#[tokio::test]
async fn treats_touching_ranges_as_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, car, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);

    assert!(
        repo.car_has_overlap(car.id, booking.end_date, booking.end_date + Duration::days(1))
            .await?
    );

    Ok(())
}

/// Tests that cancelled and completed bookings free the car.
///
/// Expected: Ok(false) for the same range
#[tokio::test]
async fn ignores_inactive_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let customer = factory::user::create_customer(db).await?;
    let start = Utc::now() + Duration::days(5);
    let end = start + Duration::days(2);
    for status in ["cancelled", "completed"] {
        factory::booking::BookingFactory::new(db, customer.id, car.id)
            .dates(start, end)
            .status(status)
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);

    assert!(!repo.car_has_overlap(car.id, start, end).await?);
    assert!(!repo.car_has_active(car.id).await?);

    Ok(())
}

/// Tests driver conflicts across different cars.
///
/// Expected: Ok(true) for the assigned driver, Ok(false) for an idle one
#[tokio::test]
async fn detects_busy_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let customer = factory::user::create_customer(db).await?;
    let (_, busy) = factory::helpers::create_approved_driver(db, "Mumbai", 4.5).await?;
    let (_, idle) = factory::helpers::create_approved_driver(db, "Mumbai", 4.0).await?;
    let booking = factory::booking::BookingFactory::new(db, customer.id, car.id)
        .driver_id(busy.id)
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert!(
        repo.driver_has_overlap(busy.id, booking.start_date, booking.end_date)
            .await?
    );
    assert!(
        !repo
            .driver_has_overlap(idle.id, booking.start_date, booking.end_date)
            .await?
    );

    Ok(())
}
