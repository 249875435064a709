//! WebAssembly module for the Mitra farming assistant
//!
//! Lets browser components resolve display strings and check form input
//! synchronously on every render:
//! - Key lookup and embedded-word substitution
//! - Phone number and OTP checks with localized messages
//! - Mandi price change percentages

use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{Language, LanguageSettings, SelectOption, ValidationResult};

fn settings(lang: &str) -> LanguageSettings {
    LanguageSettings::new(Language::from_code(lang).unwrap_or_default())
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("mitra-wasm ready"));
}

/// Resolve a display string; unknown keys come back unchanged
#[wasm_bindgen]
pub fn translate(lang: &str, key: &str) -> String {
    settings(lang).translate(key).to_string()
}

/// Replace crop and season words inside free text
#[wasm_bindgen]
pub fn translate_text(lang: &str, text: &str) -> String {
    settings(lang).translate_text(text).into_owned()
}

/// Codes of the supported languages, default first
#[wasm_bindgen]
pub fn supported_language_codes() -> js_sys::Array {
    Language::all()
        .iter()
        .map(|l| JsValue::from_str(l.code()))
        .collect()
}

#[derive(Serialize)]
struct LanguageEntry {
    code: &'static str,
    label: &'static str,
}

/// Supported languages with their labels, as JSON
#[wasm_bindgen]
pub fn supported_languages() -> Result<String, JsValue> {
    let entries: Vec<LanguageEntry> = Language::all()
        .iter()
        .map(|l| LanguageEntry {
            code: l.code(),
            label: l.label(),
        })
        .collect();
    serde_json::to_string(&entries).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Localize a JSON array of option ids into `[{id, name}]` JSON
#[wasm_bindgen]
pub fn localize_options(lang: &str, ids_json: &str) -> Result<String, JsValue> {
    let ids: Vec<String> = serde_json::from_str(ids_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid ids JSON: {}", e)))?;

    let settings = settings(lang);
    let options: Vec<SelectOption> = ids
        .into_iter()
        .map(|id| SelectOption {
            name: settings.translate(&id).to_string(),
            id,
        })
        .collect();
    serde_json::to_string(&options).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn error_message(result: ValidationResult, language: Language) -> Option<String> {
    result.err().map(|e| match language {
        Language::Hindi => e.message_hi,
        Language::English => e.message,
    })
}

/// Localized error for a phone number, or nothing when it is valid
#[wasm_bindgen]
pub fn phone_number_error(lang: &str, phone: &str) -> Option<String> {
    error_message(shared::validate_phone_number(phone), settings(lang).language)
}

/// Localized error for an OTP, or nothing when it is complete
#[wasm_bindgen]
pub fn otp_error(lang: &str, otp: &str) -> Option<String> {
    error_message(shared::validate_otp(otp), settings(lang).language)
}

/// Percent change between two prices to one decimal place, e.g. "2.7"
#[wasm_bindgen]
pub fn price_percent_change(current: i32, previous: i32) -> Option<String> {
    shared::calculate_percent_change(i64::from(current), i64::from(previous)).map(|d| d.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        assert_eq!(translate("hi", "wheat"), "गेहूं");
        assert_eq!(translate("en", "wheat"), "Wheat");
        assert_eq!(translate("fr", "wheat"), "Wheat");
        assert_eq!(translate("hi", "missingKey"), "missingKey");
    }

    #[test]
    fn test_translate_text() {
        assert_eq!(translate_text("hi", "onion and potato"), "प्याज and आलू");
        assert_eq!(translate_text("en", "onion and potato"), "onion and potato");
    }

    #[test]
    fn test_supported_languages_json() {
        let json = supported_languages().unwrap();
        assert!(json.starts_with(r#"[{"code":"en","label":"English"}"#));
    }

    #[test]
    fn test_localize_options() {
        let json = localize_options("hi", r#"["punjab","unknown"]"#).unwrap();
        let options: Vec<SelectOption> = serde_json::from_str(&json).unwrap();
        assert_eq!(options[0].name, "पंजाब");
        assert_eq!(options[1].name, "unknown");
    }

    #[test]
    fn test_form_errors() {
        assert!(phone_number_error("en", "9876543210").is_none());
        assert_eq!(
            phone_number_error("en", "98765").as_deref(),
            Some("Please enter a valid 10-digit phone number")
        );
        assert_eq!(
            otp_error("hi", "12").as_deref(),
            Some("कृपया पूरा 6 अंकों का कोड दर्ज करें")
        );
        assert!(otp_error("hi", "123456").is_none());
    }

    #[test]
    fn test_price_percent_change() {
        assert_eq!(price_percent_change(2250, 2190).as_deref(), Some("2.7"));
        assert_eq!(price_percent_change(1680, 1730).as_deref(), Some("-2.9"));
        assert_eq!(price_percent_change(100, 0), None);
    }
}
