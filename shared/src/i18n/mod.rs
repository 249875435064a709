//! Localization resolver
//!
//! Display strings are looked up through an ordered list of immutable
//! dictionaries. For a language `L` the order is:
//!
//! 1. place names in `L` (states, cities, mandis)
//! 2. general phrases in `L`
//! 3. general phrases in the default language
//!
//! A key found in none of them is returned unchanged, so resolution never
//! fails. Keys are matched exactly: no trimming and no case folding.

mod place_names;
mod phrases;
mod vocabulary;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Language;

pub use vocabulary::{translate_text, VOCABULARY};

/// One immutable dictionary layer
pub type Dictionary = HashMap<&'static str, &'static str>;

/// Dictionary layer kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    PlaceNames,
    Phrases,
}

/// Get the pre-built dictionary for a layer and language
pub fn dictionary(layer: Layer, language: Language) -> &'static Dictionary {
    match (layer, language) {
        (Layer::PlaceNames, Language::English) => &place_names::ENGLISH,
        (Layer::PlaceNames, Language::Hindi) => &place_names::HINDI,
        (Layer::Phrases, Language::English) => &phrases::ENGLISH,
        (Layer::Phrases, Language::Hindi) => &phrases::HINDI,
    }
}

/// Dictionaries consulted for `language`, highest priority first
pub fn layers(language: Language) -> [&'static Dictionary; 3] {
    [
        dictionary(Layer::PlaceNames, language),
        dictionary(Layer::Phrases, language),
        dictionary(Layer::Phrases, Language::default()),
    ]
}

/// Resolve a key to its display string in `language`
pub fn translate(language: Language, key: &str) -> &str {
    layers(language)
        .into_iter()
        .find_map(|dict| dict.get(key).copied())
        .unwrap_or(key)
}

/// The active language selection, passed explicitly to whatever renders text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSettings {
    pub language: Language,
}

impl LanguageSettings {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    pub fn translate_text<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
        translate_text(self.language, text)
    }
}
