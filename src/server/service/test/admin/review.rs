use super::*;

/// Tests approving a pending car.
///
/// Expected: Ok with status approved, then Conflict when reviewed again
#[tokio::test]
async fn approves_pending_car_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_owner(db).await?;
    let car = factory::car::CarFactory::new(db, owner.id)
        .approval_status("pending")
        .build()
        .await?;
    let service = AdminService::new(db);

    let approved = service.review_car(car.id, Review::Approve).await?;
    assert_eq!(approved.approval_status, ApprovalStatus::Approved);

    let again = service
        .review_car(car.id, Review::Reject { reason: None })
        .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests rejecting a pending driver with a reason.
///
/// Expected: Ok with status rejected and the trimmed reason stored
#[tokio::test]
async fn rejects_pending_driver_with_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).role("driver").build().await?;
    let driver = factory::driver::create_driver(db, user.id).await?;

    let (reviewed, account) = AdminService::new(db)
        .review_driver(
            driver.id,
            Review::Reject {
                reason: Some("  License expired ".to_string()),
            },
        )
        .await?;

    assert_eq!(reviewed.approval_status, ApprovalStatus::Rejected);
    assert_eq!(reviewed.rejection_reason.as_deref(), Some("License expired"));
    assert_eq!(account.id, user.id);

    Ok(())
}

/// Tests reviewing a driver that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdminService::new(db).review_driver(99, Review::Approve).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
