//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Metres per second to miles per hour
const MPS_TO_MPH: f64 = 2.23694;

/// Unit used when displaying wind speed
///
/// Upstream always reports metres per second (metric units).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WindUnit {
    #[default]
    #[serde(rename = "mps")]
    MetresPerSecond,
    #[serde(rename = "mph")]
    MilesPerHour,
}

impl WindUnit {
    /// Convert an upstream m/s reading into this unit
    pub fn convert_mps(&self, mps: f64) -> f64 {
        match self {
            WindUnit::MetresPerSecond => mps,
            WindUnit::MilesPerHour => (mps * MPS_TO_MPH * 10.0).round() / 10.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WindUnit::MetresPerSecond => "m/s",
            WindUnit::MilesPerHour => "mph",
        }
    }
}

impl std::fmt::Display for WindUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
