//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Supported languages
///
/// English is the source language: its phrase table is the last dictionary
/// consulted before a key falls through unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    /// Display label, written in the language itself
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी (Hindi)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            _ => None,
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Hindi]
    }

    pub fn is_default(&self) -> bool {
        *self == Language::default()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("th"), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert!(Language::English.is_default());
        assert!(!Language::Hindi.is_default());
    }

    #[test]
    fn test_language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Hindi).unwrap(), "\"hi\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
