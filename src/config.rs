use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Product-tuning constants for the movie-runtime recommendation. All
/// values are minutes. A TOML file may override any subset; missing keys
/// keep their defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Block time above which a flight counts as "long" (plan two movies).
    pub long_flight_min: f64,
    /// Per-movie cap on long flights.
    pub movie_cap_min: f64,
    /// Slack kept around each movie on long flights.
    pub long_buffer_min: f64,
    /// Slack kept for boarding and taxi on short flights.
    pub short_buffer_min: f64,
    /// Floor on the recommended minimum runtime.
    pub floor_min: f64,
    /// Minimum width of the recommended range.
    pub span_min: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            long_flight_min: 240.0,
            movie_cap_min: 240.0,
            long_buffer_min: 15.0,
            short_buffer_min: 30.0,
            floor_min: 30.0,
            span_min: 10.0,
        }
    }
}

impl Tuning {
    pub fn from_file(path: &Path) -> Result<Tuning> {
        Ok(toml::from_str(&read_to_string(path)?)?)
    }
}
