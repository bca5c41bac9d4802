use super::*;

/// Tests the full ride from start to completion on a per-day booking.
///
/// Expected: Ok with status completed, booked price kept and no late fine
#[tokio::test]
async fn completes_per_day_ride() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = Mailer::Log;
    let rides = service(db, &mailer);

    let (customer, driver, booking) = assigned_booking(db, "confirmed", "perDay").await?;

    rides.start(booking.id, &driver, CODE).await?;
    rides.end(booking.id, &driver, end_param(Some(80.0))).await?;
    let otp = completion_code(db, &customer.email, booking.id).await;
    let completed = rides.complete(booking.id, &driver, &otp).await?;

    assert_eq!(completed.status, BookingStatus::Completed);
    assert_eq!(completed.total_price, 4000);
    assert_eq!(completed.late_fine, 0);
    assert!(completed.completed_at.is_some());

    Ok(())
}

/// Tests repricing a per-km ride from the reported distance.
///
/// Expected: Ok with base price of 250 km at 12 per km
#[tokio::test]
async fn reprices_per_km_ride() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = Mailer::Log;
    let rides = service(db, &mailer);

    let (customer, driver, booking) = assigned_booking(db, "ongoing", "perKm").await?;

    rides.end(booking.id, &driver, end_param(Some(250.0))).await?;
    let otp = completion_code(db, &customer.email, booking.id).await;
    let completed = rides.complete(booking.id, &driver, &otp).await?;

    assert_eq!(completed.base_price, 3000);
    assert_eq!(completed.total_price, 3000);

    Ok(())
}

/// Tests the late fine for a car returned a day and an hour after the end date.
///
/// Expected: Ok with a late fine of two days
#[tokio::test]
async fn charges_late_return() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = Mailer::Log;
    let rides = service(db, &mailer);

    let (customer, driver, booking) = assigned_booking(db, "ongoing", "perDay").await?;

    let mut param = end_param(None);
    param.actual_return_date = Some(booking.end_date + Duration::hours(25));
    rides.end(booking.id, &driver, param).await?;
    let otp = completion_code(db, &customer.email, booking.id).await;
    let completed = rides.complete(booking.id, &driver, &otp).await?;

    assert_eq!(completed.late_fine, 1000);

    Ok(())
}

/// Tests completing before the ride was ended.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn requires_ended_ride() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = Mailer::Log;

    let (_, driver, booking) = assigned_booking(db, "ongoing", "perDay").await?;

    let result = service(db, &mailer)
        .complete(booking.id, &driver, "123456")
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a wrong completion passcode.
///
/// Expected: Err(InvalidOtp) and the booking stays ongoing
#[tokio::test]
async fn rejects_wrong_passcode() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = Mailer::Log;
    let rides = service(db, &mailer);

    let (customer, driver, booking) = assigned_booking(db, "ongoing", "perDay").await?;

    rides.end(booking.id, &driver, end_param(Some(5.0))).await?;
    let otp = completion_code(db, &customer.email, booking.id).await;
    let wrong = if otp == "999999" { "000000" } else { "999999" };

    let result = rides.complete(booking.id, &driver, wrong).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidOtp))
    ));

    let completed = rides.complete(booking.id, &driver, &otp).await?;
    assert_eq!(completed.status, BookingStatus::Completed);

    Ok(())
}

/// Tests that repeated wrong passcodes discard the completion code.
///
/// Expected: Err(InvalidOtp) for the real code after the allowed wrong guesses
#[tokio::test]
async fn discards_passcode_after_wrong_guesses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = Mailer::Log;
    let rides = service(db, &mailer);

    let (customer, driver, booking) = assigned_booking(db, "ongoing", "perDay").await?;

    rides.end(booking.id, &driver, end_param(Some(5.0))).await?;
    let otp = completion_code(db, &customer.email, booking.id).await;
    let wrong = if otp == "999999" { "000000" } else { "999999" };

    for _ in 0..MAX_OTP_ATTEMPTS {
        let result = rides.complete(booking.id, &driver, wrong).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidOtp))
        ));
    }

    let result = rides.complete(booking.id, &driver, &otp).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidOtp))
    ));

    Ok(())
}

/// Tests an expired completion passcode.
///
/// Expected: Err(OtpExpired), the code deleted and the booking still ongoing
#[tokio::test]
async fn rejects_expired_passcode() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = Mailer::Log;
    let rides = service(db, &mailer);

    let (customer, driver, booking) = assigned_booking(db, "ongoing", "perDay").await?;

    rides.end(booking.id, &driver, end_param(Some(5.0))).await?;
    let otps = OtpRepository::new(db);
    otps.replace(CreateOtpParam {
        email: customer.email.clone(),
        purpose: OtpPurpose::RideCompletion,
        code: "654321".to_string(),
        booking_id: Some(booking.id),
        expires_at: Utc::now() - Duration::minutes(1),
    })
    .await?;

    let result = rides.complete(booking.id, &driver, "654321").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::OtpExpired))
    ));

    assert!(otps
        .find_latest(&customer.email, OtpPurpose::RideCompletion, Some(booking.id))
        .await?
        .is_none());
    let booking = BookingRepository::new(db)
        .find_by_id(booking.id)
        .await?
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Ongoing);

    Ok(())
}
