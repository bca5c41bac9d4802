use super::*;

/// Tests creating a driver profile during registration.
///
/// Expected: Ok with a pending profile rated zero
#[tokio::test]
async fn creates_pending_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).role("driver").build().await?;

    let repo = DriverRepository::new(db);
    let driver = repo
        .create(CreateDriverParam {
            user_id: user.id,
            license_number: "MH12 20190001234".to_string(),
            city: "Pune".to_string(),
        })
        .await?;

    assert_eq!(driver.user_id, user.id);
    assert_eq!(driver.approval_status, ApprovalStatus::Pending);
    assert_eq!(driver.rating, 0.0);

    let found = repo.find_by_user_id(user.id).await?;
    assert_eq!(found.map(|d| d.id), Some(driver.id));

    Ok(())
}
