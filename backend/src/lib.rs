//! Mitra farming assistant - backend library
//!
//! Bilingual display strings, normalized weather, crop advice and mandi
//! prices for Indian farmers, served over JSON.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{GeminiClient, WeatherClient};
use services::{AdvisoryService, AuthService, ProfileStore, WeatherSelections, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
    pub selections: WeatherSelections,
    pub advisory: AdvisoryService,
    pub auth: AuthService,
}

impl AppState {
    /// Wire up services from configuration
    pub fn new(config: Config) -> Self {
        let weather_client = WeatherClient::with_base_url(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        );
        let store = ProfileStore::new(&config.storage.data_dir);

        Self {
            weather: WeatherService::new(weather_client),
            selections: WeatherSelections::new(),
            advisory: AdvisoryService::new(GeminiClient::new(&config.advisory)),
            auth: AuthService::new(store, &config),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Mitra Farming Assistant API v1.0"
}
