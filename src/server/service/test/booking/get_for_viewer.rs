use super::*;

/// Tests who may see a booking and its ride code.
///
/// Expected: customer and admin see the code, owner and driver see the booking without it
#[tokio::test]
async fn shows_code_only_to_customer_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
    let customer = factory::user::create_customer(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let (driver_user, driver) = factory::helpers::create_approved_driver(db, "Mumbai", 4.0).await?;
    let booking = factory::booking::BookingFactory::new(db, customer.id, car.id)
        .driver_id(driver.id)
        .build()
        .await?;

    let service = BookingService::new(db);

    let (_, show) = service
        .get_for_viewer(booking.id, &as_user(customer), None)
        .await?;
    assert!(show);

    let (_, show) = service
        .get_for_viewer(booking.id, &as_user(admin), None)
        .await?;
    assert!(show);

    let (found, show) = service
        .get_for_viewer(booking.id, &as_user(owner), None)
        .await?;
    assert!(!show);
    assert_eq!(found.car_name.as_deref(), Some(car.name.as_str()));

    let (_, show) = service
        .get_for_viewer(booking.id, &as_user(driver_user), Some(driver.id))
        .await?;
    assert!(!show);

    Ok(())
}

/// Tests that unrelated users are refused.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_unrelated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = as_user(factory::user::create_customer(db).await?);
    assert_eq!(stranger.role, Role::Customer);

    let result = BookingService::new(db)
        .get_for_viewer(booking.id, &stranger, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
