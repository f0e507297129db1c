//! Current weather models and condition classification

use serde::{Deserialize, Serialize};

use crate::text::title_case;
use crate::types::WindUnit;

/// Semantic bucket for an upstream condition keyword
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Danger,
    Rainy,
    Sunny,
    Cloudy,
    Snowy,
    #[default]
    Default,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Danger,
        Category::Rainy,
        Category::Sunny,
        Category::Cloudy,
        Category::Snowy,
        Category::Default,
    ];

    /// Map an OpenWeatherMap `weather[0].main` keyword to a category.
    ///
    /// Matching is exact and case-sensitive; unknown or empty keywords
    /// fall through to [`Category::Default`].
    pub fn classify(condition: &str) -> Self {
        match condition {
            "Thunderstorm" | "Extreme" => Category::Danger,
            "Rain" | "Drizzle" => Category::Rainy,
            "Clear" => Category::Sunny,
            "Clouds" => Category::Cloudy,
            "Snow" => Category::Snowy,
            _ => Category::Default,
        }
    }

    /// Lowercase label, also used as a CSS class by the pages
    pub fn label(&self) -> &'static str {
        match self {
            Category::Danger => "danger",
            Category::Rainy => "rainy",
            Category::Sunny => "sunny",
            Category::Cloudy => "cloudy",
            Category::Snowy => "snowy",
            Category::Default => "default",
        }
    }

    /// Advisory sentence shown under the current conditions
    pub fn insight(&self) -> &'static str {
        match self {
            Category::Danger => {
                "Severe weather about. Stay indoors and avoid travel unless it is essential."
            }
            Category::Rainy => "Take an umbrella and allow extra time for your journey.",
            Category::Sunny => "A good day to be outside. Don't forget the sun cream.",
            Category::Cloudy => "Grey skies but mostly dry. A light jacket should do.",
            Category::Snowy => "Wrap up warm and watch out for ice on roads and pavements.",
            Category::Default => "Check the details below before heading out.",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Insight lookup by category
pub fn insight_for(category: Category) -> &'static str {
    category.insight()
}

/// Raw current conditions as reported upstream, before normalisation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub location_name: String,
    pub temperature_celsius: f64,
    pub humidity_percent: i32,
    pub wind_speed_mps: f64,
    /// Primary condition keyword, e.g. "Rain"
    pub condition: String,
    pub description: String,
    pub icon: String,
}

/// Normalised current weather for one location query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherRecord {
    /// Name shown to the user; the provider's name unless overridden
    pub display_name: String,
    /// The query string that produced this record
    pub query_name: String,
    pub temperature_celsius: i32,
    pub humidity_percent: i32,
    pub wind_speed: f64,
    pub wind_unit: WindUnit,
    pub description: String,
    pub icon_code: String,
    pub category: Category,
    pub insight: String,
    pub trend: Option<String>,
}

impl WeatherRecord {
    /// Build a record from an upstream observation
    pub fn from_observation(query: &str, observation: Observation, wind_unit: WindUnit) -> Self {
        let category = Category::classify(&observation.condition);

        Self {
            display_name: observation.location_name,
            query_name: query.to_string(),
            temperature_celsius: round_temperature(observation.temperature_celsius),
            humidity_percent: observation.humidity_percent,
            wind_speed: wind_unit.convert_mps(observation.wind_speed_mps),
            wind_unit,
            description: observation.description,
            icon_code: observation.icon,
            category,
            insight: category.insight().to_string(),
            trend: None,
        }
    }

    /// Description with each word capitalised
    pub fn title_description(&self) -> String {
        title_case(&self.description)
    }

    pub fn with_trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = Some(trend.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }
}

/// Round a temperature to whole degrees, ties to even
pub fn round_temperature(celsius: f64) -> i32 {
    celsius.round_ties_even() as i32
}
