//! HTTP handlers for the per-area page

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::error::AppResult;
use crate::services::{AreaService, WeatherService};
use crate::views;
use crate::AppState;

/// Render current weather for each sub-area of a city
pub async fn area_weather(
    State(state): State<AppState>,
    Path(city_name): Path<String>,
) -> AppResult<Html<String>> {
    let service = AreaService::new(WeatherService::with_config(
        state.weather_client.clone(),
        &state.config,
    ));
    let result = service.fetch_area_weather(&city_name).await?;

    Ok(Html(views::render_areas(&result)))
}
