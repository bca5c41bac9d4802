use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, booking::BookingStatus};

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Car already has an active booking overlapping the requested range.
    #[error("Car is not available for the selected dates")]
    CarUnavailable,

    /// End date is not after start date, or start date is in the past.
    #[error("{0}")]
    InvalidDateRange(String),

    /// Operation is not allowed from the booking's current status.
    #[error("Booking is {}, cannot {action}", current.as_str())]
    InvalidStatus {
        /// Status the booking is currently in
        current: BookingStatus,
        /// Operation that was attempted
        action: &'static str,
    },

    /// Driver entered a code that doesn't match the booking's unique code.
    #[error("Invalid unique code")]
    InvalidUniqueCode,

    /// Ride operation attempted by a driver not assigned to the booking.
    #[error("Driver {0} is not assigned to this booking")]
    NotAssignedDriver(i32),

    /// Per-km operation is missing distance information.
    #[error("{0}")]
    MissingDistance(String),

    /// Coordinates are outside valid latitude/longitude ranges.
    #[error("Invalid coordinates")]
    InvalidCoordinates,
}

/// Converts booking errors into HTTP responses.
///
/// - `CarUnavailable` / `InvalidStatus` → 409 Conflict
/// - `NotAssignedDriver` → 403 Forbidden
/// - Everything else → 400 Bad Request
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::CarUnavailable | Self::InvalidStatus { .. } => StatusCode::CONFLICT,
            Self::NotAssignedDriver(_) => StatusCode::FORBIDDEN,
            Self::InvalidDateRange(_)
            | Self::InvalidUniqueCode
            | Self::MissingDistance(_)
            | Self::InvalidCoordinates => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
