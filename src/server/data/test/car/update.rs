use super::*;

/// Tests that editing an approved car sends it back to review.
///
/// Expected: Ok with new details and status pending
#[tokio::test]
async fn resets_approval_to_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let repo = CarRepository::new(db);
    let mut param = details("Swift ZXi");
    param.price_per_day = 2100;
    let updated = repo.update(car.id, param).await?.unwrap();

    assert_eq!(updated.name, "Swift ZXi");
    assert_eq!(updated.price_per_day, 2100);
    assert_eq!(updated.approval_status, ApprovalStatus::Pending);

    Ok(())
}

/// Tests that a rejection reason is cleared by an edit.
///
/// Expected: Ok with rejection_reason None
#[tokio::test]
async fn clears_rejection_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let repo = CarRepository::new(db);
    repo.set_approval(car.id, ApprovalStatus::Rejected, Some("Blurry photo".to_string()))
        .await?;
    let updated = repo.update(car.id, details("Swift")).await?.unwrap();

    assert!(updated.rejection_reason.is_none());

    Ok(())
}

/// Tests editing a car that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);

    assert!(repo.update(42, details("Ghost")).await?.is_none());

    Ok(())
}
