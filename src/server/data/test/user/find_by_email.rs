use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("rider@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("rider@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(repo.email_exists("rider@example.com").await?);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None) and email_exists false
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}

/// Tests that a corrupted role column surfaces as an internal error.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("odd@example.com")
        .role("superuser")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("odd@example.com").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
