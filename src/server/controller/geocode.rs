use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, geocode::GeocodeResultDto},
    server::{
        controller::param::GeocodeParams, error::AppError, service::geocode::GeocodeService,
        state::AppState,
    },
};

pub static GEOCODE_TAG: &str = "geocode";

/// Search addresses for pickup and drop points.
///
/// Proxies the query to Nominatim so the browser never calls it directly.
///
/// # Returns
/// - `200 OK` - Up to five matches
/// - `400 Bad Request` - Empty query
/// - `500 Internal Server Error` - Nominatim unreachable
#[utoipa::path(
    get,
    path = "/api/geocode",
    tag = GEOCODE_TAG,
    params(
        ("q" = String, Query, description = "Free-form address query")
    ),
    responses(
        (status = 200, description = "Matching places", body = Vec<GeocodeResultDto>),
        (status = 400, description = "Empty query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<impl IntoResponse, AppError> {
    let results = GeocodeService::new(&state.http_client, &state.nominatim_url)
        .search(&params.q)
        .await?;

    Ok(Json(results))
}
