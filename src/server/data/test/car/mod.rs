use crate::{
    model::api::ApprovalStatus,
    server::{data::car::CarRepository, error::AppError, model::car::CarDetailsParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn details(name: &str) -> CarDetailsParam {
    CarDetailsParam {
        name: name.to_string(),
        brand: "Maruti".to_string(),
        model: "Swift".to_string(),
        year: 2022,
        city: "Pune".to_string(),
        seats: 5,
        fuel_type: "petrol".to_string(),
        transmission: "manual".to_string(),
        price_per_day: 1800,
        price_per_km: 10,
        image_url: None,
    }
}
