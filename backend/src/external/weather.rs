//! Weather API client for fetching weather data
//!
//! Integrates with the OpenWeatherMap API for current conditions and the
//! 5-day / 3-hour forecast. Requests are made without a `units` parameter,
//! so temperatures arrive in Kelvin and wind speeds in metres per second.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::GpsCoordinates;
use tracing::{debug, instrument};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmCurrentResponse {
    pub dt: i64,
    #[serde(default)]
    pub timezone: i32,
    pub main: OwmMain,
    pub wind: OwmWind,
    #[serde(default)]
    pub weather: Vec<OwmWeather>,
    pub rain: Option<OwmRain>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmWind {
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmWeather {
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Precipitation accumulated over the last hour or three hours, in mm
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OwmRain {
    #[serde(rename = "1h", default, skip_serializing_if = "Option::is_none")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", default, skip_serializing_if = "Option::is_none")]
    pub three_hour: Option<f64>,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmForecastResponse {
    pub list: Vec<OwmForecastItem>,
    #[serde(default)]
    pub city: Option<OwmCity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmCity {
    pub name: String,
    /// Offset from UTC in seconds
    #[serde(default)]
    pub timezone: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmForecastItem {
    pub dt: i64,
    pub main: OwmMain,
    #[serde(default)]
    pub weather: Vec<OwmWeather>,
    pub wind: OwmWind,
    pub rain: Option<OwmRain>,
}

impl WeatherClient {
    /// Create a client for the provider at `base_url`
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current weather conditions by GPS coordinates
    #[instrument(skip(self), fields(lat = %coords.latitude, lon = %coords.longitude))]
    pub async fn get_current_weather(
        &self,
        coords: GpsCoordinates,
    ) -> AppResult<OwmCurrentResponse> {
        debug!("Fetching current weather");
        self.get_json("weather", &coords, "Current weather").await
    }

    /// Fetch the 3-hourly forecast by GPS coordinates
    #[instrument(skip(self), fields(lat = %coords.latitude, lon = %coords.longitude))]
    pub async fn get_forecast(&self, coords: GpsCoordinates) -> AppResult<OwmForecastResponse> {
        debug!("Fetching forecast");
        self.get_json("forecast", &coords, "Forecast").await
    }

    // Errors must not echo the URL: it carries the api key
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        coords: &GpsCoordinates,
        what: &str,
    ) -> AppResult<T> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::WeatherProvider(format!("{} request failed: {}", what, e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherProvider(format!(
                "{} data fetch failed: {} - {}",
                what, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| {
                AppError::WeatherProvider(format!(
                    "Failed to parse {} response: {}",
                    what,
                    e.without_url()
                ))
            })
    }
}
