//! HTTP handlers for crop advisory

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{translate, Language, SelectOption, CROPS, REGIONS, SEASONS};

use super::{language_from, LangQuery};
use crate::error::AppResult;
use crate::services::advisory::AdvisoryResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AdvisoryOptions {
    pub crops: Vec<SelectOption>,
    pub seasons: Vec<SelectOption>,
    pub regions: Vec<SelectOption>,
}

fn options(language: Language, ids: &[&str]) -> Vec<SelectOption> {
    ids.iter()
        .map(|id| SelectOption {
            id: id.to_string(),
            name: translate(language, id).to_string(),
        })
        .collect()
}

/// Crops, seasons and regions for the advisory form
pub async fn advisory_options(Query(query): Query<LangQuery>) -> Json<AdvisoryOptions> {
    let language = query.language();
    Json(AdvisoryOptions {
        crops: options(language, CROPS),
        seasons: options(language, SEASONS),
        regions: options(language, REGIONS),
    })
}

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    #[serde(default)]
    pub crop: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub season: String,
    pub lang: Option<String>,
}

/// Get three lines of advice for a crop
pub async fn get_advice(
    State(state): State<AppState>,
    Json(input): Json<AdviceRequest>,
) -> AppResult<Json<AdvisoryResponse>> {
    let language = language_from(input.lang.as_deref());
    let response = state
        .advisory
        .advise(language, &input.crop, &input.region, &input.season)
        .await?;
    Ok(Json(response))
}
