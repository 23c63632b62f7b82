use contracts::domain::city::SupportedCity;

use crate::shared::http::{ApiClient, ApiError};

pub const SUPPORTED_CITIES_PATH: &str = "/media/getSupportedCities";

/// Fetch the cities the backend covers. An empty or `null` body means no cities.
pub async fn fetch_supported_cities(api: &ApiClient) -> Result<Vec<SupportedCity>, ApiError> {
    let cities = api
        .get_json::<Option<Vec<SupportedCity>>>(SUPPORTED_CITIES_PATH)
        .await?;
    Ok(cities.flatten().unwrap_or_default())
}
