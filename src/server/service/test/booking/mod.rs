use chrono::{Duration, Utc};

use crate::{
    model::{
        booking::{BookingStatus, PricingMode},
        user::Role,
    },
    server::{
        data::booking::BookingScope,
        error::{auth::AuthError, booking::BookingError, AppError},
        model::{
            booking::{BookingRequestParam, GeoPoint},
            user::User,
        },
        service::booking::BookingService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod assign_driver;
mod create;
mod get_for_viewer;
mod quote;

fn request(car_id: i32, start_in_hours: i64, duration_hours: i64) -> BookingRequestParam {
    let start = Utc::now() + Duration::hours(start_in_hours);
    BookingRequestParam {
        car_id,
        start_date: start,
        end_date: start + Duration::hours(duration_hours),
        pricing_mode: PricingMode::PerDay,
        ac: false,
        pickup: GeoPoint {
            lat: 19.076,
            lng: 72.8777,
            address: None,
        },
        drop: GeoPoint {
            lat: 18.5204,
            lng: 73.8567,
            address: None,
        },
    }
}

fn as_user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}
