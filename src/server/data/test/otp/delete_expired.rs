use super::*;

/// Tests that only expired codes are swept.
///
/// Expected: Ok(1) with the live code still present
#[tokio::test]
async fn deletes_only_expired() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    repo.replace(signup("old@example.com", "111111", Duration::minutes(-1)))
        .await?;
    repo.replace(signup("new@example.com", "222222", Duration::minutes(10)))
        .await?;

    let deleted = repo.delete_expired(Utc::now()).await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .find_latest("new@example.com", OtpPurpose::Signup, None)
        .await?
        .is_some());

    Ok(())
}
