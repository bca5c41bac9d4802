use super::*;

/// Tests booking a car with a free driver in its city.
///
/// Expected: Ok with confirmed status, per-day price and the best rated driver
#[tokio::test]
async fn creates_booking_with_best_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let customer = factory::user::create_customer(db).await?;
    factory::helpers::create_approved_driver(db, "Mumbai", 3.9).await?;
    let (_, best) = factory::helpers::create_approved_driver(db, "Mumbai", 4.9).await?;

    let service = BookingService::new(db);
    let booking = service.create(customer.id, request(car.id, 24, 30)).await?;

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.driver_id, Some(best.id));
    assert_eq!(booking.base_price, 4000);
    assert_eq!(booking.total_price, 4000);
    assert_eq!(booking.unique_code.len(), 6);

    Ok(())
}

/// Tests that a busy driver is skipped for the next best one.
///
/// Expected: Ok with the second driver assigned
#[tokio::test]
async fn skips_busy_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
    let other_car = factory::car::create_car(db, owner.id).await?;
    let customer = factory::user::create_customer(db).await?;
    let (_, busy) = factory::helpers::create_approved_driver(db, "Mumbai", 5.0).await?;
    let (_, free) = factory::helpers::create_approved_driver(db, "Mumbai", 4.0).await?;

    let service = BookingService::new(db);
    let first = service.create(customer.id, request(car.id, 24, 48)).await?;
    assert_eq!(first.driver_id, Some(busy.id));

    let second = service
        .create(customer.id, request(other_car.id, 36, 24))
        .await?;
    assert_eq!(second.driver_id, Some(free.id));

    Ok(())
}

/// Tests that a booking is still made when no driver is free.
///
/// Expected: Ok with driver_id None
#[tokio::test]
async fn books_without_driver_when_none_free() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let customer = factory::user::create_customer(db).await?;
    factory::helpers::create_approved_driver(db, "Delhi", 5.0).await?;

    let booking = BookingService::new(db)
        .create(customer.id, request(car.id, 24, 24))
        .await?;

    assert!(booking.driver_id.is_none());

    Ok(())
}

/// Tests that overlapping requests are refused.
///
/// Expected: Err(CarUnavailable)
#[tokio::test]
async fn rejects_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let customer = factory::user::create_customer(db).await?;

    let service = BookingService::new(db);
    service.create(customer.id, request(car.id, 24, 48)).await?;
    let result = service.create(customer.id, request(car.id, 48, 24)).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::CarUnavailable))
    ));

    Ok(())
}

/// Tests date validation.
///
/// Expected: Err(InvalidDateRange) for reversed and past ranges
#[tokio::test]
async fn rejects_invalid_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let customer = factory::user::create_customer(db).await?;
    let service = BookingService::new(db);

    let reversed = service.create(customer.id, request(car.id, 24, -2)).await;
    let past = service.create(customer.id, request(car.id, -48, 24)).await;

    assert!(matches!(
        reversed,
        Err(AppError::BookingErr(BookingError::InvalidDateRange(_)))
    ));
    assert!(matches!(
        past,
        Err(AppError::BookingErr(BookingError::InvalidDateRange(_)))
    ));

    Ok(())
}

/// Tests that cars awaiting approval cannot be booked.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unapproved_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_owner(db).await?;
    let car = factory::car::CarFactory::new(db, owner.id)
        .approval_status("pending")
        .build()
        .await?;
    let customer = factory::user::create_customer(db).await?;

    let result = BookingService::new(db)
        .create(customer.id, request(car.id, 24, 24))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
