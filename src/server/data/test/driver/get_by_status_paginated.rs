use super::*;

/// Tests listing the pending review queue with user details attached.
///
/// Expected: Ok with only the pending driver and its user
#[tokio::test]
async fn lists_pending_drivers_with_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_approved_driver(db, "Pune", 4.0).await?;
    let user = factory::user::UserFactory::new(db).role("driver").build().await?;
    let pending = factory::driver::create_driver(db, user.id).await?;

    let repo = DriverRepository::new(db);
    let (drivers, total) = repo
        .get_by_status_paginated(Some(ApprovalStatus::Pending), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(drivers[0].0.id, pending.id);
    assert_eq!(drivers[0].1.email, user.email);

    let (_, total) = repo.get_by_status_paginated(None, 0, 10).await?;
    assert_eq!(total, 2);

    Ok(())
}
