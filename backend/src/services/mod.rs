//! Business logic services for UK Weather Insights

pub mod area;
pub mod weather;

pub use area::AreaService;
pub use weather::{CityReport, WeatherService};
