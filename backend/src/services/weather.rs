//! Weather service: current conditions, daily forecast and trend

use chrono::NaiveDate;
use serde::Serialize;
use shared::{
    areas, extract_midday_forecast, ForecastRecord, TrendPolicy, WeatherRecord, WindUnit,
};

use crate::config::Config;
use crate::error::WeatherError;
use crate::external::weather::WeatherClient;

/// Weather service turning upstream responses into page data
#[derive(Clone)]
pub struct WeatherService {
    weather_client: WeatherClient,
    wind_unit: WindUnit,
    trend: TrendPolicy,
}

/// Everything the search page shows for one city
#[derive(Debug, Clone, Serialize)]
pub struct CityReport {
    /// Current conditions, with the trend sentence attached
    pub weather: WeatherRecord,
    pub forecast: Vec<ForecastRecord>,
    /// Synthetic "yesterday" card
    pub previous: Vec<ForecastRecord>,
    /// Whether the city has a sub-area page
    pub has_areas: bool,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(weather_client: WeatherClient, wind_unit: WindUnit, trend: TrendPolicy) -> Self {
        Self {
            weather_client,
            wind_unit,
            trend,
        }
    }

    /// Create a WeatherService using the configured units and trend policy
    pub fn with_config(weather_client: WeatherClient, config: &Config) -> Self {
        Self::new(weather_client, config.weather.wind_unit, config.trend)
    }

    /// Fetch and normalise current conditions for a location query
    pub async fn fetch_current(&self, query: &str) -> Result<WeatherRecord, WeatherError> {
        let observation = self.weather_client.get_current(query).await?;
        Ok(WeatherRecord::from_observation(
            query,
            observation,
            self.wind_unit,
        ))
    }

    /// Fetch the daily forecast; any failure yields an empty list
    pub async fn fetch_forecast(&self, query: &str) -> Vec<ForecastRecord> {
        match self.weather_client.get_forecast_samples(query).await {
            Ok(samples) => extract_midday_forecast(&samples),
            Err(e) => {
                tracing::warn!(query, error = %e, "Forecast unavailable");
                Vec::new()
            }
        }
    }

    /// Build the full search page report for a city.
    ///
    /// Fails only when current conditions cannot be fetched; the forecast
    /// degrades to empty.
    pub async fn city_report(
        &self,
        city: &str,
        today: NaiveDate,
    ) -> Result<CityReport, WeatherError> {
        let current = self.fetch_current(city).await?;
        let forecast = self.fetch_forecast(city).await;
        let trend = self.trend.compute(current.temperature_celsius, today);

        Ok(CityReport {
            weather: current.with_trend(trend.text),
            forecast,
            previous: vec![trend.baseline],
            has_areas: areas::has_areas(city),
        })
    }
}
