//! Weather provider and normalizer tests
//!
//! The provider is mocked with WireMock so the full fetch path runs without
//! network access.

use mitra_backend::error::AppError;
use mitra_backend::external::WeatherClient;
use mitra_backend::services::weather::{normalize, WeatherService};
use mitra_backend::external::weather::{OwmCurrentResponse, OwmForecastResponse};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

// 2024-06-01T00:00:00Z
const DAY_START: i64 = 1_717_200_000;

// =============================================================================
// Test Helpers
// =============================================================================

fn current_payload() -> serde_json::Value {
    serde_json::json!({
        "dt": DAY_START + 9 * 3600,
        "timezone": 0,
        "main": {
            "temp": 300.15,
            "feels_like": 303.4,
            "temp_min": 298.15,
            "temp_max": 301.15,
            "humidity": 62
        },
        "wind": { "speed": 3.0 },
        "weather": [
            { "main": "Clear", "description": "clear sky", "icon": "01d" }
        ],
        "name": "Delhi"
    })
}

/// Eight 3-hourly samples per day for `days` days, warming by one degree per sample
fn forecast_payload(days: i64) -> serde_json::Value {
    let list: Vec<_> = (0..days * 8)
        .map(|i| {
            serde_json::json!({
                "dt": DAY_START + i * 3 * 3600,
                "main": {
                    "temp": 290.15 + i as f64,
                    "feels_like": 290.15,
                    "temp_min": 290.15,
                    "temp_max": 290.15,
                    "humidity": 40 + i
                },
                "weather": [
                    { "main": "Clouds", "description": "scattered clouds", "icon": "03d" }
                ],
                "wind": { "speed": 1.5 },
                "rain": { "3h": 0.25 }
            })
        })
        .collect();

    serde_json::json!({
        "list": list,
        "city": { "name": "Delhi", "timezone": 0 }
    })
}

async fn mount_provider(server: &MockServer, days: i64) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_payload()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload(days)))
        .mount(server)
        .await;
}

fn service_for(server: &MockServer) -> WeatherService {
    WeatherService::new(WeatherClient::with_base_url(
        "test-key".to_string(),
        server.uri(),
    ))
}

// =============================================================================
// Fetch path
// =============================================================================

#[tokio::test]
async fn test_fetch_report_normalizes_provider_data() {
    let server = MockServer::start().await;
    mount_provider(&server, 6).await;

    let report = service_for(&server).fetch_report("Delhi").await.unwrap();

    assert_eq!(report.location, "Delhi");
    assert_eq!(report.current.temperature.max, 27);
    assert_eq!(report.current.temperature.min, 25);
    assert_eq!(report.current.humidity_percent, 62);
    assert_eq!(report.current.wind_speed_kmh, 11);
    assert_eq!(report.current.rainfall_mm, 0.0);
    assert_eq!(report.current.condition, "clear");

    // Six dates in the forecast: today is dropped
    assert_eq!(report.daily.len(), 5);
    assert!(report.daily.windows(2).all(|w| w[0].date < w[1].date));

    // Second date holds samples 8..16: first sample supplies humidity
    let day = &report.daily[0];
    assert_eq!(day.humidity_percent, 48);
    assert_eq!(day.temperature.min, 25);
    assert_eq!(day.temperature.max, 32);
    assert_eq!(day.rainfall_mm, 0.25);
    assert_eq!(day.wind_speed_kmh, 5);
}

#[tokio::test]
async fn test_fetch_sends_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "19.0760"))
        .and(query_param("lon", "72.8777"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_payload()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", "19.0760"))
        .and(query_param("lon", "72.8777"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload(2)))
        .expect(1)
        .mount(&server)
        .await;

    let report = service_for(&server).fetch_report("Mumbai").await.unwrap();
    assert_eq!(report.location, "Mumbai");
    assert_eq!(report.daily.len(), 1);
}

#[tokio::test]
async fn test_unknown_city_makes_no_requests() {
    let server = MockServer::start().await;
    mount_provider(&server, 6).await;

    let result = service_for(&server).fetch_report("Hyderabad").await;

    assert!(matches!(result, Err(AppError::UnknownLocation(_))));
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_current_failure_fails_whole_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload(6)))
        .expect(0)
        .mount(&server)
        .await;

    let result = service_for(&server).fetch_report("Delhi").await;
    assert!(matches!(result, Err(AppError::WeatherProvider(_))));
}

#[tokio::test]
async fn test_forecast_failure_fails_whole_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_payload()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = service_for(&server).fetch_report("Chennai").await;
    assert!(matches!(result, Err(AppError::WeatherProvider(_))));
}

#[tokio::test]
async fn test_malformed_payload_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "cod": 200 })))
        .mount(&server)
        .await;

    let result = service_for(&server).fetch_report("Kolkata").await;
    match result {
        Err(e @ AppError::WeatherProvider(_)) => assert!(!e.to_string().contains("test-key")),
        other => panic!("expected provider error, got {:?}", other.map(|r| r.location)),
    }
}

#[tokio::test]
async fn test_unreachable_provider_error_hides_api_key() {
    let client = WeatherClient::with_base_url(
        "SECRET-WEATHER-KEY".to_string(),
        "http://127.0.0.1:9".to_string(),
    );

    let result = WeatherService::new(client).fetch_report("Delhi").await;
    let message = match result {
        Err(e) => e.to_string(),
        Ok(_) => panic!("fetch from a closed port should fail"),
    };
    assert!(message.contains("request failed"));
    assert!(!message.contains("SECRET-WEATHER-KEY"));
}

// =============================================================================
// Payload parsing
// =============================================================================

#[test]
fn test_optional_payload_fields() {
    let mut current = current_payload();
    current["rain"] = serde_json::json!({ "1h": 1.2 });
    let current: OwmCurrentResponse = serde_json::from_value(current).unwrap();

    let forecast: OwmForecastResponse = serde_json::from_value(serde_json::json!({
        "list": [
            {
                "dt": DAY_START,
                "main": { "temp": 280.0, "feels_like": 280.0, "temp_min": 280.0, "temp_max": 280.0, "humidity": 90 },
                "weather": [],
                "wind": { "speed": 0.0 }
            },
            {
                "dt": DAY_START + 86_400,
                "main": { "temp": 281.0, "feels_like": 281.0, "temp_min": 281.0, "temp_max": 281.0, "humidity": 91 },
                "weather": [],
                "wind": { "speed": 0.0 }
            }
        ]
    }))
    .unwrap();

    let report = normalize(&current, &forecast, "Bangalore");
    assert_eq!(report.current.rainfall_mm, 1.2);
    assert_eq!(report.daily.len(), 1);
    assert_eq!(report.daily[0].condition, "");
    assert_eq!(report.daily[0].rainfall_mm, 0.0);
    assert!(report.daily[0].icon.is_none());
}
