//! HTTP handlers for UK Weather Insights

pub mod area;
pub mod health;
pub mod weather;

pub use area::area_weather;
pub use health::health_check;
pub use weather::{index, search};
