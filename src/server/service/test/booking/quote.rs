use super::*;

/// Tests a per-km quote with AC.
///
/// Expected: Ok with distance-based price over the day rate, 10% AC and available
#[tokio::test]
async fn quotes_per_km_with_ac() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_owner(db).await?;
    let car = factory::car::CarFactory::new(db, owner.id)
        .price_per_km(20)
        .build()
        .await?;

    let mut param = request(car.id, 24, 10);
    param.pricing_mode = PricingMode::PerKm;
    param.ac = true;
    let (quote, available) = BookingService::new(db).quote(&param).await?;

    // Mumbai to Pune is about 120.2 km, above the day rate at 20 per km.
    assert!(quote.base_price > 2000);
    assert_eq!(quote.base_price, (quote.distance_km * 20.0).round() as i64);
    assert_eq!(quote.ac_charge, (quote.base_price as f64 / 10.0).round() as i64);
    assert_eq!(quote.total_price, quote.base_price + quote.ac_charge);
    assert!(available);

    Ok(())
}

/// Tests that quoting reports a taken car without failing.
///
/// Expected: Ok with available false and nothing stored
#[tokio::test]
async fn reports_unavailable_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, customer, car, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let mut param = request(car.id, 0, 24);
    param.start_date = booking.start_date;
    param.end_date = booking.end_date;
    let service = BookingService::new(db);
    let (_, available) = service.quote(&param).await?;

    assert!(!available);
    let listed = service
        .list(BookingScope::Customer(customer.id), None, 0, 10)
        .await?;
    assert_eq!(listed.total, 1);

    Ok(())
}
