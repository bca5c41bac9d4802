use super::*;

/// Tests resolving an approved driver.
///
/// Expected: Ok with the account and its driver profile
#[tokio::test]
async fn returns_driver_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (user, driver) = factory::helpers::create_approved_driver(db, "Pune", 4.2).await?;
    let headers = bearer(&token_for(&tokens, &user));

    let (account, profile) = AuthGuard::new(db, &tokens, &headers)
        .require_driver()
        .await?;

    assert_eq!(account.id, user.id);
    assert_eq!(profile.id, driver.id);
    assert_eq!(profile.city, "Pune");

    Ok(())
}

/// Tests a rejected driver.
///
/// Expected: Err(DriverRejected)
#[tokio::test]
async fn rejects_rejected_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::UserFactory::new(db).role("driver").build().await?;
    factory::driver::DriverFactory::new(db, user.id)
        .approval_status("rejected")
        .build()
        .await?;
    let headers = bearer(&token_for(&tokens, &user));

    let result = AuthGuard::new(db, &tokens, &headers).require_driver().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::DriverRejected(_)))
    ));

    Ok(())
}

/// Tests a customer calling a driver endpoint.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let customer = factory::user::create_customer(db).await?;
    let headers = bearer(&token_for(&tokens, &customer));

    let result = AuthGuard::new(db, &tokens, &headers).require_driver().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that non-drivers carry no profile.
///
/// Expected: Ok with None for an admin
#[tokio::test]
async fn returns_no_profile_for_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::user::create_admin(db).await?;
    let headers = bearer(&token_for(&tokens, &admin));

    let (user, profile) = AuthGuard::new(db, &tokens, &headers)
        .require_with_profile(&[])
        .await?;

    assert_eq!(user.role, Role::Admin);
    assert!(profile.is_none());

    Ok(())
}
