use super::*;

/// Tests seeding the first admin.
///
/// Expected: an admin is created once and later calls do nothing
#[tokio::test]
async fn seeds_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AdminService::new(db);

    let admin = service
        .seed_admin(" Admin@Example.com", "admin-pass")
        .await?
        .expect("admin should be seeded");
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(admin.email, "admin@example.com");

    let again = service.seed_admin("second@example.com", "admin-pass").await?;
    assert!(again.is_none());

    Ok(())
}

/// Tests seeding with an email that belongs to a customer.
///
/// Expected: Ok(None) and the customer is left alone
#[tokio::test]
async fn skips_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("owner@example.com")
        .build()
        .await?;

    let seeded = AdminService::new(db)
        .seed_admin("owner@example.com", "admin-pass")
        .await?;

    assert!(seeded.is_none());

    Ok(())
}
