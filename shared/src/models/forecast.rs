//! Daily forecast models and midday sample selection

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::weather::round_temperature;
use crate::text::title_case;

/// Timestamp layout of the upstream `dt_txt` field
pub const FORECAST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One 3-hourly sample from the 5 day forecast feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Local timestamp, e.g. "2024-03-01 12:00:00"
    pub dt_txt: String,
    pub temperature_celsius: f64,
    pub icon: String,
    pub description: String,
}

/// One day of forecast, as shown on the search page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastRecord {
    /// Weekday name, e.g. "Monday"
    pub day: String,
    pub temperature_celsius: i32,
    pub icon_code: String,
    pub description: Option<String>,
}

impl ForecastSample {
    fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.dt_txt, FORECAST_TIME_FORMAT).ok()
    }

    /// True when the sample is the 12:00:00 slot of its day
    pub fn is_midday(&self) -> bool {
        self.timestamp()
            .is_some_and(|ts| Some(ts.time()) == NaiveTime::from_hms_opt(12, 0, 0))
    }
}

/// Reduce a 3-hourly feed to one record per day, taken from the noon slot.
///
/// Feed order is kept. Samples with an unparseable timestamp are dropped.
pub fn extract_midday_forecast(samples: &[ForecastSample]) -> Vec<ForecastRecord> {
    samples
        .iter()
        .filter(|sample| sample.is_midday())
        .filter_map(|sample| {
            let ts = sample.timestamp()?;
            Some(ForecastRecord {
                day: ts.format("%A").to_string(),
                temperature_celsius: round_temperature(sample.temperature_celsius),
                icon_code: sample.icon.clone(),
                description: Some(title_case(&sample.description)),
            })
        })
        .collect()
}
