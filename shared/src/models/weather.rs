//! Weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily temperature bounds in whole degrees Celsius
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemperatureRange {
    pub max: i32,
    pub min: i32,
}

/// A normalized weather observation or daily aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub date: NaiveDate,
    pub temperature: TemperatureRange,
    pub humidity_percent: i32,
    pub rainfall_mm: f64,
    pub wind_speed_kmh: i32,
    /// Lower-cased condition category, e.g. "rain"
    pub condition: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like_celsius: Option<i32>,
}

/// Current conditions plus the forecast series for one location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub current: WeatherSnapshot,
    /// One entry per day after today, ascending, at most seven
    pub daily: Vec<WeatherSnapshot>,
}

/// What a weather panel currently shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeatherView {
    Loading,
    Ready { report: WeatherReport },
    Failed { message: String },
}
