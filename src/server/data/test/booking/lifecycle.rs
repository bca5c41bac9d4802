use super::*;

/// Tests moving a booking through start, end report and completion.
///
/// Expected: Ok with each step persisted and a completed booking at the end
#[tokio::test]
async fn persists_each_ride_step() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let repo = BookingRepository::new(db);
    let now = Utc::now();

    let started = repo.start_ride(booking.id, now).await?;
    assert_eq!(started.status, BookingStatus::Ongoing);
    assert!(started.ride_started_at.is_some());

    let ended = repo.record_ride_end(booking.id, Some(130.5), now).await?;
    assert_eq!(ended.status, BookingStatus::Ongoing);
    assert_eq!(ended.actual_distance_km, Some(130.5));

    let completed = repo.complete(booking.id, 4000, 400, 500, now).await?;
    assert_eq!(completed.status, BookingStatus::Completed);
    assert_eq!(completed.total_price, 4400);
    assert_eq!(completed.late_fine, 500);
    assert!(completed.completed_at.is_some());

    Ok(())
}

/// Tests cancelling with a fine.
///
/// Expected: Ok with status cancelled, fine and timestamp stored
#[tokio::test]
async fn cancels_with_fine() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let repo = BookingRepository::new(db);

    let cancelled = repo.cancel(booking.id, 300, Utc::now()).await?;

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(cancelled.cancellation_fine, 300);
    assert!(cancelled.cancelled_at.is_some());

    Ok(())
}

/// Tests updating a booking that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo.start_ride(404, Utc::now()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
