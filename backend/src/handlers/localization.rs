//! HTTP handlers for display-string lookup

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use shared::{Language, LanguageSettings};
use validator::Validate;

use super::language_from;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub label: &'static str,
    pub is_default: bool,
}

/// List supported languages
pub async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(
        Language::all()
            .iter()
            .map(|l| LanguageInfo {
                code: l.code(),
                label: l.label(),
                is_default: l.is_default(),
            })
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
pub struct TranslateQuery {
    pub lang: Option<String>,
    #[serde(default)]
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub language: Language,
    pub text: String,
}

/// Resolve one key; unknown keys come back unchanged
pub async fn translate_key(Query(query): Query<TranslateQuery>) -> Json<TranslationResponse> {
    let settings = LanguageSettings::new(language_from(query.lang.as_deref()));
    Json(TranslationResponse {
        language: settings.language,
        text: settings.translate(&query.key).to_string(),
    })
}

#[derive(Debug, Deserialize, Validate)]
pub struct TranslateTextRequest {
    pub lang: Option<String>,
    #[validate(length(max = 10000))]
    pub text: String,
}

/// Replace known crop and season words inside free text
pub async fn translate_free_text(
    Json(input): Json<TranslateTextRequest>,
) -> AppResult<Json<TranslationResponse>> {
    input.validate()?;

    let settings = LanguageSettings::new(language_from(input.lang.as_deref()));
    Ok(Json(TranslationResponse {
        language: settings.language,
        text: settings.translate_text(&input.text).into_owned(),
    }))
}
