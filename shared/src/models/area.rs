//! City sub-area models

use serde::{Deserialize, Serialize};

use crate::models::weather::{Category, WeatherRecord};

/// Weather for every sub-area of a city that answered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaWeather {
    /// Canonical city name, e.g. "London"
    pub city: String,
    /// One record per sub-area, in the configured order
    pub areas: Vec<WeatherRecord>,
    pub dominant_category: Category,
}

impl AreaWeather {
    pub fn new(city: impl Into<String>, areas: Vec<WeatherRecord>) -> Self {
        let dominant_category = dominant_category(&areas);
        Self {
            city: city.into(),
            areas,
            dominant_category,
        }
    }
}

/// Category of the first record, or `Default` when there are none
pub fn dominant_category(records: &[WeatherRecord]) -> Category {
    records
        .first()
        .map(|r| r.category)
        .unwrap_or(Category::Default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WindUnit;

    fn record(name: &str, category: Category) -> WeatherRecord {
        WeatherRecord {
            display_name: name.to_string(),
            query_name: format!("{name},London"),
            temperature_celsius: 12,
            humidity_percent: 80,
            wind_speed: 3.0,
            wind_unit: WindUnit::MetresPerSecond,
            description: "overcast clouds".to_string(),
            icon_code: "04d".to_string(),
            category,
            insight: category.insight().to_string(),
            trend: None,
        }
    }

    #[test]
    fn test_dominant_is_first_record() {
        let records = vec![
            record("Camden", Category::Rainy),
            record("Chelsea", Category::Sunny),
            record("Brixton", Category::Sunny),
        ];
        assert_eq!(dominant_category(&records), Category::Rainy);
    }

    #[test]
    fn test_dominant_of_empty_is_default() {
        assert_eq!(dominant_category(&[]), Category::Default);
        let result = AreaWeather::new("London", Vec::new());
        assert_eq!(result.dominant_category, Category::Default);
        assert!(result.areas.is_empty());
    }
}
