//! Day-on-day temperature trend
//!
//! There is no historical data source yet: "yesterday" is a synthetic
//! baseline derived from today's temperature and a fixed offset.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::ForecastRecord;

/// Icon used for the synthetic baseline card
pub const BASELINE_ICON: &str = "03d";

/// Description used for the synthetic baseline card
pub const BASELINE_DESCRIPTION: &str = "Partly Cloudy (Demo)";

/// How the "yesterday" baseline is derived
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendPolicy {
    /// Degrees subtracted from today's temperature to get yesterday's
    pub baseline_offset: i32,
}

impl Default for TrendPolicy {
    fn default() -> Self {
        Self { baseline_offset: 2 }
    }
}

/// Baseline card plus the sentence comparing today against it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trend {
    pub baseline: ForecastRecord,
    pub text: String,
}

impl TrendPolicy {
    pub fn new(baseline_offset: i32) -> Self {
        Self { baseline_offset }
    }

    /// Compare `current` against the synthetic baseline for the day before `today`
    pub fn compute(&self, current: i32, today: NaiveDate) -> Trend {
        let baseline_temp = current.saturating_sub(self.baseline_offset);
        let day = today
            .checked_sub_days(Days::new(1))
            .map(|d| d.format("%A").to_string())
            .unwrap_or_else(|| "Yesterday".to_string());

        Trend {
            baseline: ForecastRecord {
                day,
                temperature_celsius: baseline_temp,
                icon_code: BASELINE_ICON.to_string(),
                description: Some(BASELINE_DESCRIPTION.to_string()),
            },
            text: trend_text(current, baseline_temp),
        }
    }
}

/// Sentence describing how `current` compares with `baseline`
pub fn trend_text(current: i32, baseline: i32) -> String {
    let diff = current.abs_diff(baseline);
    match current.cmp(&baseline) {
        std::cmp::Ordering::Greater => format!("{diff}° warmer than yesterday"),
        std::cmp::Ordering::Less => format!("{diff}° colder than yesterday"),
        std::cmp::Ordering::Equal => "0° difference from yesterday".to_string(),
    }
}
