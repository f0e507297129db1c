//! UK Weather Insights - web front end
//!
//! Looks up current weather and a short daily forecast for UK cities from
//! OpenWeatherMap and renders them as HTML, with a per-area breakdown for
//! the larger cities.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod views;

pub use config::Config;
pub use error::{AppError, AppResult, WeatherError};
pub use external::WeatherClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather_client: WeatherClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let weather_client = WeatherClient::from_config(&config.weather);
        Self {
            config: Arc::new(config),
            weather_client,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(routes::page_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
