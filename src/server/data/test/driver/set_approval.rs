use super::*;

/// Tests rejecting a driver with a reason.
///
/// Expected: Ok(Some) with status rejected and reason stored
#[tokio::test]
async fn stores_status_and_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).role("driver").build().await?;
    let driver = factory::driver::create_driver(db, user.id).await?;

    let repo = DriverRepository::new(db);
    let updated = repo
        .set_approval(
            driver.id,
            ApprovalStatus::Rejected,
            Some("License expired".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.approval_status, ApprovalStatus::Rejected);
    assert_eq!(updated.rejection_reason.as_deref(), Some("License expired"));
    assert_eq!(repo.count_by_status(ApprovalStatus::Rejected).await?, 1);

    Ok(())
}

/// Tests updating a driver that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriverRepository::new(db);
    let result = repo.set_approval(999, ApprovalStatus::Approved, None).await?;

    assert!(result.is_none());

    Ok(())
}
