use super::*;

/// Tests that new listings start in review.
///
/// Expected: Ok with a pending car owned by the owner
#[tokio::test]
async fn creates_pending_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_owner(db).await?;

    let repo = CarRepository::new(db);
    let car = repo.create(owner.id, details("Swift VXi")).await?;

    assert_eq!(car.owner_id, owner.id);
    assert_eq!(car.approval_status, ApprovalStatus::Pending);
    assert!(car.rejection_reason.is_none());

    let owned = repo.get_by_owner(owner.id).await?;
    assert_eq!(owned.len(), 1);

    Ok(())
}
