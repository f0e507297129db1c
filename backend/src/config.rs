//! Configuration management for UK Weather Insights
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with UKW_ prefix
//! 4. The bare `WEATHER_API_KEY` variable, for existing `.env` files

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{TrendPolicy, WindUnit};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Trend baseline configuration
    #[serde(default)]
    pub trend: TrendPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    #[serde(default)]
    pub api_key: String,

    /// Country filter appended to every location query
    pub country_code: String,

    /// Unit used to display wind speed
    #[serde(default)]
    pub wind_unit: WindUnit,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("UKW_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Self::load_from(
            &environment,
            env_overrides(),
            std::env::var("WEATHER_API_KEY").ok(),
        )
    }

    fn load_from(
        environment: &str,
        overrides: Environment,
        api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment)?
            .set_default("server.port", 5001)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", DEFAULT_API_ENDPOINT)?
            .set_default("weather.api_key", "")?
            .set_default("weather.country_code", "GB")?
            .set_default("weather.wind_unit", "mps")?
            .set_default("trend.baseline_offset", 2)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (UKW_ prefix)
            .add_source(overrides)
            .set_override_option("weather.api_key", api_key)?
            .build()?;

        config.try_deserialize()
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `UKW_SERVER__PORT` style variables: one `_` after the prefix, `__`
/// between nested keys
fn env_overrides() -> Environment {
    Environment::with_prefix("UKW")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5001,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_key: String::new(),
            country_code: "GB".to_string(),
            wind_unit: WindUnit::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            trend: TrendPolicy::default(),
        }
    }
}
