use super::*;

/// Tests who can see a car that is still pending review.
///
/// Expected: owner and admin get the car, anonymous and other users get NotFound
#[tokio::test]
async fn hides_pending_car_from_public() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = User::from_entity(factory::user::create_owner(db).await?)?;
    let admin = User::from_entity(factory::user::create_admin(db).await?)?;
    let customer = User::from_entity(factory::user::create_customer(db).await?)?;
    let car = factory::car::CarFactory::new(db, owner.id)
        .approval_status("pending")
        .build()
        .await?;
    let service = CarService::new(db);

    assert_eq!(service.get_for_viewer(car.id, Some(&owner)).await?.id, car.id);
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(service.get_for_viewer(car.id, Some(&admin)).await?.id, car.id);
    assert!(matches!(
        service.get_for_viewer(car.id, Some(&customer)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_for_viewer(car.id, None).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that approved cars are public.
///
/// Expected: Ok without a viewer
#[tokio::test]
async fn shows_approved_car_to_anyone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let found = CarService::new(db).get_for_viewer(car.id, None).await?;

    assert_eq!(found.name, car.name);

    Ok(())
}
