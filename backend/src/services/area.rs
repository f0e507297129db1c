//! Per-area weather for cities with known sub-areas

use shared::{areas, AreaWeather};

use crate::error::WeatherError;
use crate::services::weather::WeatherService;

/// Aggregates current weather across a city's sub-areas
#[derive(Clone)]
pub struct AreaService {
    weather: WeatherService,
}

impl AreaService {
    pub fn new(weather: WeatherService) -> Self {
        Self { weather }
    }

    /// Fetch current weather for every sub-area of `city`, one call at a time.
    ///
    /// Sub-areas that fail upstream are left out. Returns
    /// `WeatherError::UnknownCity` without any upstream call when the city
    /// has no sub-area table.
    pub async fn fetch_area_weather(&self, city: &str) -> Result<AreaWeather, WeatherError> {
        let city_key = areas::canonical_city_name(city);
        let area_list =
            areas::areas_for(&city_key).ok_or_else(|| WeatherError::UnknownCity(city_key.clone()))?;

        let mut records = Vec::with_capacity(area_list.len());
        for area in area_list {
            let query = areas::area_query(area, &city_key);
            match self.weather.fetch_current(&query).await {
                Ok(record) => records.push(record.with_display_name(*area)),
                Err(e) => tracing::debug!(area = *area, error = %e, "Skipping area"),
            }
        }

        tracing::info!(
            city = %city_key,
            found = records.len(),
            requested = area_list.len(),
            "Area weather fetched"
        );

        Ok(AreaWeather::new(city_key, records))
    }
}
