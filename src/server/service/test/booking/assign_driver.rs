use super::*;

/// Tests assigning a driver to a booking made while none was free.
///
/// Expected: Ok with the new driver, then Conflict on a second attempt
#[tokio::test]
async fn assigns_driver_later() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let (_, driver) = factory::helpers::create_approved_driver(db, "Mumbai", 4.5).await?;

    let service = BookingService::new(db);
    let assigned = service.assign_driver(booking.id).await?;
    assert_eq!(assigned.driver_id, Some(driver.id));

    let again = service.assign_driver(booking.id).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests assignment when nobody is available.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn fails_without_available_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let result = BookingService::new(db).assign_driver(booking.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
