use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GeocodeResultDto {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}
