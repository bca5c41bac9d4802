use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn fails_with_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::create_customer(db).await?;
    let foreign = TokenService::new("other-secret", Duration::hours(1));
    let headers = bearer(&token_for(&foreign, &user));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token for an account that no longer exists.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer(&tokens.issue(404, Role::Customer).unwrap());

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(404)))
    ));

    Ok(())
}

/// Tests role checks.
///
/// Expected: Ok for an allowed role, Err(AccessDenied) otherwise
#[tokio::test]
async fn checks_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let owner = factory::user::create_owner(db).await?;
    let headers = bearer(&token_for(&tokens, &owner));
    let guard = AuthGuard::new(db, &tokens, &headers);

    let user = guard.require(&[Role::Owner, Role::Admin]).await?;
    assert_eq!(user.id, owner.id);

    let denied = guard.require(&[Role::Admin]).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == owner.id
    ));

    Ok(())
}

/// Tests that a pending driver is turned away even where drivers are allowed.
///
/// Expected: Err(DriverPending)
#[tokio::test]
async fn rejects_pending_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::UserFactory::new(db).role("driver").build().await?;
    factory::driver::create_driver(db, user.id).await?;
    let headers = bearer(&token_for(&tokens, &user));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::DriverPending(_)))
    ));

    Ok(())
}
