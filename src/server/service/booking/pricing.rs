//! Booking price arithmetic.
//!
//! All amounts are whole currency units. Fractional results are rounded half away from
//! zero, so a 10% surcharge on 1005 is 101.

use chrono::{DateTime, Utc};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::{model::booking::PricingMode, server::model::booking::GeoPoint};

const EARTH_RADIUS_KM: f64 = 6371.0;
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// AC surcharge as a fraction of the base price (10%).
const AC_SURCHARGE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

const LATE_FINE_PER_DAY: i64 = 500;
const CANCEL_FINE_UNDER_48H: i64 = 300;
const CANCEL_FINE_UNDER_24H: i64 = 500;
const CANCEL_FINE_AFTER_START: i64 = 1000;

/// Rates of the car being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rates {
    pub price_per_day: i64,
    pub price_per_km: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub days: i64,
    /// Distance rounded to 0.1 km.
    pub distance_km: f64,
    pub base_price: i64,
    pub ac_charge: i64,
    pub total_price: i64,
}

/// Billable days for a range: started days count in full, with a minimum of one.
pub fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds();
    let days = (seconds + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY);

    days.max(1)
}

/// Great-circle distance in kilometres.
pub fn haversine_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = ((d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance as a decimal rounded to 0.1 km.
fn distance_decimal(km: f64) -> Decimal {
    Decimal::new((km.max(0.0) * 10.0).round() as i64, 1)
}

/// Price before AC for the given mode.
///
/// Per-km pricing never charges less than one day's rate.
pub fn base_price(mode: PricingMode, rates: Rates, days: i64, distance_km: f64) -> i64 {
    match mode {
        PricingMode::PerDay => rates.price_per_day.saturating_mul(days),
        PricingMode::PerKm => {
            let by_distance = Decimal::from(rates.price_per_km)
                .checked_mul(distance_decimal(distance_km))
                .map_or(i64::MAX, to_whole);
            by_distance.max(rates.price_per_day)
        }
    }
}

/// 10% of the base price, or nothing without AC.
pub fn ac_surcharge(base_price: i64, ac: bool) -> i64 {
    if !ac {
        return 0;
    }

    to_whole(Decimal::from(base_price) * AC_SURCHARGE_RATE)
}

/// Prices a booking request from its dates and pickup and drop points.
pub fn quote(
    mode: PricingMode,
    rates: Rates,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    pickup: &GeoPoint,
    drop: &GeoPoint,
    ac: bool,
) -> PriceQuote {
    let days = rental_days(start, end);
    let distance = distance_decimal(haversine_km(pickup, drop));
    let distance_km = distance.to_f64().unwrap_or_default();
    let base_price = base_price(mode, rates, days, distance_km);
    let ac_charge = ac_surcharge(base_price, ac);

    PriceQuote {
        days,
        distance_km,
        base_price,
        ac_charge,
        total_price: base_price.saturating_add(ac_charge),
    }
}

/// Fine for cancelling a booking that starts at `start` at time `now`.
///
/// | When | Fine |
/// | --- | --- |
/// | 48h or more before start | 0 |
/// | 24h to 48h before start | 300 |
/// | under 24h before start | 500 |
/// | after start | 1000 |
pub fn cancellation_fine(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    if now > start {
        return CANCEL_FINE_AFTER_START;
    }

    let hours_before = (start - now).num_hours();
    if hours_before >= 48 {
        0
    } else if hours_before >= 24 {
        CANCEL_FINE_UNDER_48H
    } else {
        CANCEL_FINE_UNDER_24H
    }
}

/// Fine for returning a car after `end`, charged per started day of delay.
pub fn late_fine(end: DateTime<Utc>, returned_at: DateTime<Utc>) -> i64 {
    let late_seconds = (returned_at - end).num_seconds();
    if late_seconds <= 0 {
        return 0;
    }

    let late_days = (late_seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    LATE_FINE_PER_DAY.saturating_mul(late_days)
}

/// Rounds to whole units, saturating on overflow.
fn to_whole(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}
