//! Weather API client for fetching weather data
//!
//! Integrates with the OpenWeatherMap 2.5 API for current conditions and
//! the 5 day / 3 hour forecast. Locations are looked up by free-text name
//! restricted to a single country.

use reqwest::{Client, Response};
use serde::Deserialize;
use shared::{ForecastSample, Observation};

use crate::config::WeatherConfig;
use crate::error::WeatherError;

/// Upstream unit system; temperatures in Celsius, wind in m/s
const UNITS: &str = "metric";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    country_code: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    #[serde(default)]
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt_txt: String,
    main: OWMMain,
    weather: Vec<OWMWeather>,
}

impl WeatherClient {
    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            country_code: "GB".to_string(),
        }
    }

    /// Create a client from the `[weather]` config section
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::with_base_url(config.api_key.clone(), config.api_endpoint.clone())
            .with_country_code(config.country_code.clone())
    }

    pub fn with_country_code(mut self, country_code: String) -> Self {
        self.country_code = country_code;
        self
    }

    /// Fetch current conditions for a location query such as "Leeds" or
    /// "Camden,London"
    pub async fn get_current(&self, query: &str) -> Result<Observation, WeatherError> {
        let response = self.request("weather", query).await?;

        let data: OWMCurrentResponse = response.json().await.map_err(|e| {
            WeatherError::Transient(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(convert_current_response(data))
    }

    /// Fetch the raw 3-hourly forecast feed for a location query
    pub async fn get_forecast_samples(
        &self,
        query: &str,
    ) -> Result<Vec<ForecastSample>, WeatherError> {
        let response = self.request("forecast", query).await?;

        let data: OWMForecastResponse = response.json().await.map_err(|e| {
            WeatherError::Transient(format!("Failed to parse forecast response: {}", e))
        })?;

        Ok(convert_forecast_response(data))
    }

    /// Issue one GET against `{base_url}/{endpoint}` and check the status
    async fn request(&self, endpoint: &str, query: &str) -> Result<Response, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let location = format!("{},{}", query, self.country_code);

        tracing::debug!(endpoint, location = %location, "Calling weather API");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location.as_str()),
                ("units", UNITS),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(endpoint, location = %location, %status, "Weather API returned no data");
            return Err(WeatherError::NotFound {
                query: query.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

/// Convert OpenWeatherMap current response to our format
fn convert_current_response(data: OWMCurrentResponse) -> Observation {
    let weather = data.weather.first();

    Observation {
        location_name: data.name,
        temperature_celsius: data.main.temp,
        humidity_percent: data.main.humidity,
        wind_speed_mps: data.wind.speed,
        condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
        description: weather.map(|w| w.description.clone()).unwrap_or_default(),
        icon: weather.map(|w| w.icon.clone()).unwrap_or_default(),
    }
}

/// Convert OpenWeatherMap forecast response to our format
fn convert_forecast_response(data: OWMForecastResponse) -> Vec<ForecastSample> {
    data.list
        .into_iter()
        .map(|item| {
            let weather = item.weather.first();
            ForecastSample {
                dt_txt: item.dt_txt,
                temperature_celsius: item.main.temp,
                icon: weather.map(|w| w.icon.clone()).unwrap_or_default(),
                description: weather.map(|w| w.description.clone()).unwrap_or_default(),
            }
        })
        .collect()
}
