//! Address search through a Nominatim instance.

use serde::Deserialize;
use url::Url;

use crate::{model::geocode::GeocodeResultDto, server::error::AppError};

const RESULT_LIMIT: &str = "5";

/// Place as returned by Nominatim, which encodes coordinates as strings.
#[derive(Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

pub struct GeocodeService<'a> {
    http_client: &'a reqwest::Client,
    base_url: &'a str,
}

impl<'a> GeocodeService<'a> {
    pub fn new(http_client: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Searches for places matching a free-form query.
    ///
    /// Places with unparsable coordinates are skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<GeocodeResultDto>)` - Matching places, best match first
    /// - `Err(AppError::BadRequest)` - Query is empty
    /// - `Err(AppError::ReqwestErr)` - Nominatim unreachable or returned an error status
    pub async fn search(&self, query: &str) -> Result<Vec<GeocodeResultDto>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest("Search query is required".to_string()));
        }

        let places = self
            .http_client
            .get(search_url(self.base_url)?)
            .query(&[("q", query), ("format", "json"), ("limit", RESULT_LIMIT)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<NominatimPlace>>()
            .await?;

        Ok(places.into_iter().filter_map(into_result).collect())
    }
}

fn search_url(base_url: &str) -> Result<Url, AppError> {
    let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
        .map_err(|e| AppError::InternalError(format!("Invalid geocoder URL: {}", e)))?;

    base.join("search")
        .map_err(|e| AppError::InternalError(format!("Invalid geocoder URL: {}", e)))
}

fn into_result(place: NominatimPlace) -> Option<GeocodeResultDto> {
    Some(GeocodeResultDto {
        lat: place.lat.parse().ok()?,
        lon: place.lon.parse().ok()?,
        display_name: place.display_name,
    })
}
