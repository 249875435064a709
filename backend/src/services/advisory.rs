//! Crop advisory service
//!
//! Asks the generative model for three lines of advice. Any failure falls
//! back to fixed advice templates, so a validated request always gets an
//! answer.

use serde::Serialize;
use shared::{translate_text, validate_all_required, AdviceSource, CropAdvice, Language};
use tracing::{info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::external::GeminiClient;

/// Advice returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryResponse {
    pub crop: String,
    pub region: String,
    pub season: String,
    pub language: Language,
    pub advice: CropAdvice,
    pub source: AdviceSource,
}

/// Build the prompt for one crop, region and season
pub fn build_prompt(language: Language, crop: &str, region: &str, season: &str) -> String {
    match language {
        Language::Hindi => format!(
            "आप एक कृषि विशेषज्ञ हैं जो {region} में {season} मौसम के दौरान {crop} की खेती के लिए सलाह प्रदान कर रहे हैं।\n\n\
             कृपया तीन विशिष्ट, कार्रवाई योग्य सलाह दें:\n\
             1. सिंचाई के बारे में एक पंक्ति (विशिष्ट पानी की मात्रा या समय शामिल करें)\n\
             2. कीट नियंत्रण के बारे में एक पंक्ति (विशिष्ट कीटों और उपचारों का उल्लेख करें)\n\
             3. उर्वरकों के बारे में एक पंक्ति (विशिष्ट मात्रा और समय शामिल करें)\n\n\
             प्रत्येक पंक्ति {crop} के लिए विशिष्ट होनी चाहिए, मापने योग्य मीट्रिक्स होने चाहिए, और {region} की {season} परिस्थितियों पर विचार करना चाहिए।\n\
             अपनी प्रतिक्रिया में लाइन नंबर या लेबल शामिल न करें।\n\
             कोई अतिरिक्त टेक्स्ट न जोड़ें।\n\
             बस ठीक 3 लाइनों की सलाह दें।"
        ),
        Language::English => format!(
            "You are an agricultural expert providing advice for {crop} cultivation in {region} during the {season} season.\n\n\
             Please provide exactly three lines of specific, actionable advice:\n\
             1. One line about irrigation (include specific water quantities or timing)\n\
             2. One line about pest control (mention specific pests and treatments)\n\
             3. One line about fertilizers (include specific quantities and timing)\n\n\
             Each line should be specific to {crop}, contain measurable metrics, and consider {region}'s {season} conditions.\n\
             DO NOT include line numbers or labels in your response.\n\
             DO NOT add any extra text.\n\
             Just provide exactly 3 lines of advice."
        ),
    }
}

/// Parse generated text into advice
///
/// Lines are trimmed and blank lines dropped. Exactly three must remain:
/// irrigation, pest control and fertilizers, in that order.
pub fn parse_advice(text: &str) -> AppResult<CropAdvice> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.as_slice() {
        [irrigation, pest_control, fertilizers] => Ok(CropAdvice {
            irrigation: irrigation.to_string(),
            pest_control: pest_control.to_string(),
            fertilizers: fertilizers.to_string(),
        }),
        _ => Err(AppError::AdvisoryProvider(format!(
            "Expected 3 lines of advice, got {}",
            lines.len()
        ))),
    }
}

/// Fixed advice embedding the crop and season as given
pub fn fallback_advice(language: Language, crop: &str, season: &str) -> CropAdvice {
    match language {
        Language::Hindi => CropAdvice {
            irrigation: format!(
                "मिट्टी की नमी और मौसम की स्थिति के आधार पर {crop} को नियमित रूप से पानी दें।"
            ),
            pest_control: format!(
                "{season} के दौरान विशेष रूप से {crop} में आम कीटों और बीमारियों की निगरानी करें।"
            ),
            fertilizers: format!("{crop} की वृद्धि के चरण के लिए उपयुक्त संतुलित उर्वरक लगाएं।"),
        },
        Language::English => CropAdvice {
            irrigation: format!(
                "Water {crop} regularly based on soil moisture levels and weather conditions."
            ),
            pest_control: format!(
                "Monitor {crop} for common pests and diseases, especially during {season}."
            ),
            fertilizers: format!("Apply balanced fertilizers suitable for {crop} growth stage."),
        },
    }
}

fn localize(language: Language, advice: CropAdvice) -> CropAdvice {
    CropAdvice {
        irrigation: translate_text(language, &advice.irrigation).into_owned(),
        pest_control: translate_text(language, &advice.pest_control).into_owned(),
        fertilizers: translate_text(language, &advice.fertilizers).into_owned(),
    }
}

/// Crop advisory service
#[derive(Clone)]
pub struct AdvisoryService {
    client: GeminiClient,
}

impl AdvisoryService {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Produce advice for a crop, region and season
    ///
    /// Only missing fields are reported as errors. Provider failures,
    /// malformed responses and a missing API key all yield fallback advice.
    #[instrument(skip(self))]
    pub async fn advise(
        &self,
        language: Language,
        crop: &str,
        region: &str,
        season: &str,
    ) -> AppResult<AdvisoryResponse> {
        validate_all_required(&[("crop", crop), ("region", region), ("season", season)])?;

        let (advice, source) = match self.generate(language, crop, region, season).await {
            Ok(advice) => (advice, AdviceSource::Generated),
            Err(e) => {
                warn!(error = %e, "Using fallback advice");
                (fallback_advice(language, crop, season), AdviceSource::Fallback)
            }
        };

        info!(?source, "Advice ready");
        Ok(AdvisoryResponse {
            crop: crop.to_string(),
            region: region.to_string(),
            season: season.to_string(),
            language,
            advice: localize(language, advice),
            source,
        })
    }

    async fn generate(
        &self,
        language: Language,
        crop: &str,
        region: &str,
        season: &str,
    ) -> AppResult<CropAdvice> {
        if !self.client.is_configured() {
            return Err(AppError::Configuration(
                "Advisory API key is not set".to_string(),
            ));
        }
        let prompt = build_prompt(language, crop, region, season);
        let text = self.client.generate(&prompt).await?;
        parse_advice(&text)
    }
}
