use crate::{
    model::{api::ApprovalStatus, user::Role},
    server::{
        data::{booking::BookingRepository, car::CarRepository},
        error::AppError,
        model::{car::CarDetailsParam, user::User},
        service::{admin::AdminService, car::CarService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_for_viewer;

fn details(name: &str) -> CarDetailsParam {
    CarDetailsParam {
        name: name.to_string(),
        brand: "Hyundai".to_string(),
        model: "Creta".to_string(),
        year: 2023,
        city: "Pune".to_string(),
        seats: 5,
        fuel_type: "diesel".to_string(),
        transmission: "automatic".to_string(),
        price_per_day: 3000,
        price_per_km: 15,
        image_url: None,
    }
}
