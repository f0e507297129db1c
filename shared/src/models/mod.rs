//! Domain models for UK Weather Insights

mod area;
mod forecast;
mod weather;

pub use area::*;
pub use forecast::*;
pub use weather::*;
