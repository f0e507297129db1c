//! HTTP handlers for the city search page

use axum::{extract::State, response::Html, Form};
use chrono::Local;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::services::WeatherService;
use crate::views::{self, IndexPage};
use crate::AppState;

/// Search form submission
#[derive(Debug, Deserialize, Validate)]
pub struct SearchForm {
    #[serde(default)]
    #[validate(custom = "validate_city")]
    pub city: String,
}

fn validate_city(city: &str) -> Result<(), ValidationError> {
    shared::validate_city_name(city).map_err(|msg| {
        let mut err = ValidationError::new("city");
        err.message = Some(msg.into());
        err
    })
}

/// Render the empty search page
pub async fn index() -> Html<String> {
    Html(views::render_index(&IndexPage::default()))
}

/// Look up a city and render current weather, trend and forecast
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    // Blank submissions just show the empty page again
    if form.city.trim().is_empty() {
        return Ok(Html(views::render_index(&IndexPage::default())));
    }

    form.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    let city = form.city.trim().to_string();

    tracing::info!(city = %city, "City search");

    let service = WeatherService::with_config(state.weather_client.clone(), &state.config);
    let page = match service.city_report(&city, Local::now().date_naive()).await {
        Ok(report) => IndexPage {
            city: Some(city),
            report: Some(report),
            error: None,
        },
        Err(e) => {
            tracing::info!(city = %city, error = %e, "No current weather for city");
            IndexPage {
                city: Some(city),
                report: None,
                error: Some("City not found.".to_string()),
            }
        }
    };

    Ok(Html(views::render_index(&page)))
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid city name".to_string())
}
