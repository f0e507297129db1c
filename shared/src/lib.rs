//! Shared types and models for UK Weather Insights
//!
//! This crate holds the request-independent logic: condition
//! classification, insights, forecast reduction, the trend baseline and
//! the table of city sub-areas. It performs no I/O.

pub mod areas;
pub mod models;
pub mod text;
pub mod trend;
pub mod types;
pub mod validation;

pub use models::*;
pub use trend::*;
pub use types::*;
pub use validation::*;
