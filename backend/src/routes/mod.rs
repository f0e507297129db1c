//! Route definitions for UK Weather Insights

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// HTML pages
pub fn page_routes() -> Router<AppState> {
    Router::new()
        // City search form and results
        .route("/", get(handlers::index).post(handlers::search))
        // Per-area weather for cities with sub-areas
        .route("/areas/:city_name", get(handlers::area_weather))
}
