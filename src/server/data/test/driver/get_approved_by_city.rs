use super::*;

/// Tests that candidates are ordered by rating, best first.
///
/// Expected: Ok with the 4.8 driver before the 4.1 driver
#[tokio::test]
async fn orders_by_rating_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, low) = factory::helpers::create_approved_driver(db, "Pune", 4.1).await?;
    let (_, high) = factory::helpers::create_approved_driver(db, "Pune", 4.8).await?;

    let repo = DriverRepository::new(db);
    let drivers = repo.get_approved_by_city("Pune").await?;

    let ids: Vec<i32> = drivers.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![high.id, low.id]);

    Ok(())
}

/// Tests that drivers in other cities or awaiting approval are excluded.
///
/// Expected: Ok with only the approved Pune driver
#[tokio::test]
async fn excludes_other_cities_and_unapproved() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, approved) = factory::helpers::create_approved_driver(db, "Pune", 4.0).await?;
    factory::helpers::create_approved_driver(db, "Mumbai", 5.0).await?;
    let pending_user = factory::user::UserFactory::new(db).role("driver").build().await?;
    factory::driver::DriverFactory::new(db, pending_user.id)
        .city("Pune")
        .rating(5.0)
        .build()
        .await?;

    let repo = DriverRepository::new(db);
    let drivers = repo.get_approved_by_city("Pune").await?;

    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].id, approved.id);

    Ok(())
}

/// Tests that the city match ignores case and surrounding whitespace.
///
/// Expected: Ok with the driver stored as "mumbai" found for " Mumbai "
#[tokio::test]
async fn matches_city_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, driver) = factory::helpers::create_approved_driver(db, "mumbai", 4.0).await?;

    let drivers = DriverRepository::new(db)
        .get_approved_by_city(" Mumbai ")
        .await?;

    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].id, driver.id);

    Ok(())
}
