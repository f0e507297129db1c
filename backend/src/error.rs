//! Error handling for UK Weather Insights
//!
//! `WeatherError` is what the upstream client and services return.
//! `AppError` is what handlers return; it renders as an HTML page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

/// Failures from the weather provider and the area lookup
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Upstream answered with a non-success status (unknown place, bad key)
    #[error("No weather data for '{query}' (status {status})")]
    NotFound { query: String, status: u16 },

    /// Network failure or an unreadable response body
    #[error("Weather API request failed: {0}")]
    Transient(String),

    /// City is not in the sub-area table
    #[error("No areas found for {0}")]
    UnknownCity(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transient(err.to_string())
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl AppError {
    /// Status code and the message shown to the user
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Weather(WeatherError::UnknownCity(city)) => {
                (StatusCode::NOT_FOUND, format!("No areas found for {}.", city))
            }
            AppError::Weather(WeatherError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "City not found.".to_string())
            }
            AppError::Weather(WeatherError::Transient(_)) => (
                StatusCode::BAD_GATEWAY,
                "The weather service is unavailable right now. Please try again later."
                    .to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::info!("Request rejected: {}", self);
        }

        (status, Html(views::render_error(&message))).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
