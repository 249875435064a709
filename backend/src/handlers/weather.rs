//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{translate, Language, SelectOption, WeatherReport, WeatherView};
use validator::Validate;

use super::{language_from, LangQuery};
use crate::error::{AppError, AppResult};
use crate::services::weather::{Selection, CITIES};
use crate::AppState;

/// List cities with weather coverage
pub async fn list_cities(Query(query): Query<LangQuery>) -> Json<Vec<SelectOption>> {
    let language = query.language();
    Json(
        CITIES
            .iter()
            .map(|city| SelectOption {
                id: city.to_string(),
                name: translate(language, city).to_string(),
            })
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub location_name: String,
    #[serde(flatten)]
    pub report: WeatherReport,
}

/// Fetch current conditions and the daily forecast for a city
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherResponse>> {
    let language = language_from(query.lang.as_deref());
    let report = state.weather.fetch_report(&query.city).await?;

    Ok(Json(WeatherResponse {
        location_name: translate(language, &report.location).to_string(),
        report,
    }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SelectCityRequest {
    #[validate(length(min = 1, max = 128))]
    pub session_id: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub generation: u64,
    /// False when a newer selection for the same session superseded this one
    pub applied: bool,
    pub city: String,
    pub view: WeatherView,
}

fn failed_view(language: Language) -> WeatherView {
    WeatherView::Failed {
        message: translate(language, "weatherFetchFailed").to_string(),
    }
}

/// Select a city for a session's weather panel
///
/// The panel shows the outcome of the latest selection only. Failures are
/// applied as an error state rather than returned as errors.
pub async fn select_city(
    State(state): State<AppState>,
    Json(input): Json<SelectCityRequest>,
) -> AppResult<Json<SelectionResponse>> {
    input.validate()?;
    let language = language_from(input.lang.as_deref());

    let token = state.selections.begin(&input.session_id, &input.city).await;

    let view = match state.weather.fetch_report(&input.city).await {
        Ok(report) => WeatherView::Ready { report },
        Err(e) => {
            tracing::warn!(city = %input.city, error = %e, "Weather fetch failed");
            failed_view(language)
        }
    };

    let applied = state.selections.complete(&token, view.clone()).await;

    Ok(Json(SelectionResponse {
        generation: token.generation,
        applied,
        city: input.city,
        view,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub session_id: String,
}

/// Current weather panel state of a session
pub async fn current_selection(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> AppResult<Json<Selection>> {
    state
        .selections
        .current(&query.session_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Weather selection".to_string()))
}
