use super::*;

/// Tests logging in with correct credentials.
///
/// Expected: Ok with a token for the user
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, mailer) = (tokens(), Mailer::Log);
    let service = service(db, &tokens, &mailer);

    let created = factory::user::UserFactory::new(db)
        .email("owner@example.com")
        .password_hash(hash_password("secret123")?)
        .role("owner")
        .build()
        .await?;

    let (token, user) = service.login("Owner@Example.com", "secret123").await?;

    assert_eq!(user.id, created.id);
    assert_eq!(tokens.verify(&token).unwrap().role, Role::Owner);

    Ok(())
}

/// Tests that wrong passwords and unknown emails look the same.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, mailer) = (tokens(), Mailer::Log);
    let service = service(db, &tokens, &mailer);

    factory::user::UserFactory::new(db)
        .email("c@example.com")
        .password_hash(hash_password("secret123")?)
        .build()
        .await?;

    let wrong_password = service.login("c@example.com", "secret124").await;
    let unknown = service.login("nobody@example.com", "secret123").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that driver approval gates login.
///
/// Expected: DriverPending, then DriverRejected, then Ok once approved
#[tokio::test]
async fn gates_driver_login_on_approval() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, mailer) = (tokens(), Mailer::Log);
    let service = service(db, &tokens, &mailer);

    let user = factory::user::UserFactory::new(db)
        .email("drv@example.com")
        .password_hash(hash_password("secret123")?)
        .role("driver")
        .build()
        .await?;
    let driver = factory::driver::create_driver(db, user.id).await?;
    let repo = DriverRepository::new(db);

    let pending = service.login("drv@example.com", "secret123").await;
    assert!(matches!(
        pending,
        Err(AppError::AuthErr(AuthError::DriverPending(_)))
    ));

    repo.set_approval(driver.id, ApprovalStatus::Rejected, None)
        .await?;
    let rejected = service.login("drv@example.com", "secret123").await;
    assert!(matches!(
        rejected,
        Err(AppError::AuthErr(AuthError::DriverRejected(_)))
    ));

    repo.set_approval(driver.id, ApprovalStatus::Approved, None)
        .await?;
    assert!(service.login("drv@example.com", "secret123").await.is_ok());

    Ok(())
}
