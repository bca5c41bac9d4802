use super::*;

/// Tests that a new OTP supersedes the previous one for the same email.
///
/// Expected: Ok with only the latest code stored
#[tokio::test]
async fn replaces_previous_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    repo.replace(signup("a@example.com", "111111", Duration::minutes(10)))
        .await?;
    repo.replace(signup("a@example.com", "222222", Duration::minutes(10)))
        .await?;

    let latest = repo
        .find_latest("a@example.com", OtpPurpose::Signup, None)
        .await?
        .unwrap();
    assert_eq!(latest.code, "222222");

    assert_eq!(
        repo.delete_for("a@example.com", OtpPurpose::Signup, None)
            .await?,
        1
    );

    Ok(())
}

/// Tests that codes for different purposes and bookings are kept apart.
///
/// Expected: Ok with the signup code untouched by a ride completion code
#[tokio::test]
async fn keeps_purposes_separate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    repo.replace(signup("b@example.com", "111111", Duration::minutes(10)))
        .await?;
    repo.replace(CreateOtpParam {
        email: "b@example.com".to_string(),
        purpose: OtpPurpose::RideCompletion,
        code: "333333".to_string(),
        booking_id: Some(7),
        expires_at: Utc::now() + Duration::minutes(10),
    })
    .await?;

    let signup_code = repo
        .find_latest("b@example.com", OtpPurpose::Signup, None)
        .await?;
    let ride_code = repo
        .find_latest("b@example.com", OtpPurpose::RideCompletion, Some(7))
        .await?;
    let other_booking = repo
        .find_latest("b@example.com", OtpPurpose::RideCompletion, Some(8))
        .await?;

    assert_eq!(signup_code.map(|o| o.code).as_deref(), Some("111111"));
    assert_eq!(ride_code.map(|o| o.code).as_deref(), Some("333333"));
    assert!(other_booking.is_none());

    Ok(())
}
