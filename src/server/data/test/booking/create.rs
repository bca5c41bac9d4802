use super::*;

/// Tests storing a priced booking.
///
/// Expected: Ok with a confirmed booking carrying the given prices and code
#[tokio::test]
async fn creates_confirmed_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let customer = factory::user::create_customer(db).await?;
    let start = Utc::now() + Duration::days(1);

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParam {
            customer_id: customer.id,
            car_id: car.id,
            driver_id: None,
            start_date: start,
            end_date: start + Duration::hours(30),
            pricing_mode: PricingMode::PerDay,
            ac: true,
            pickup: GeoPoint {
                lat: 18.5204,
                lng: 73.8567,
                address: Some("Shivajinagar".to_string()),
            },
            drop: GeoPoint {
                lat: 18.5314,
                lng: 73.8446,
                address: None,
            },
            estimated_distance_km: 1.7,
            base_price: 4000,
            ac_charge: 400,
            total_price: 4400,
            unique_code: "482913".to_string(),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.total_price, 4400);
    assert_eq!(booking.unique_code, "482913");
    assert_eq!(booking.pickup.address.as_deref(), Some("Shivajinagar"));

    let (found, found_car) = repo.find_with_car(booking.id).await?.unwrap();
    assert_eq!(found.id, booking.id);
    assert_eq!(found_car.id, car.id);

    Ok(())
}
