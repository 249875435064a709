//! Embedded-word substitution for free text
//!
//! Replaces whole-word occurrences of a small fixed vocabulary (crop and
//! season names) with their translation. Anything else in the text,
//! including inflected forms and multi-word phrases, is left as is.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::translate;
use crate::types::Language;

/// Words replaced inside free text, all lower case
pub const VOCABULARY: &[&str] = &[
    "rice", "wheat", "cotton", "pulses", "potato", "tomato", "onion", "kharif", "rabi", "zaid",
];

static VOCABULARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = VOCABULARY.join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("vocabulary pattern must compile")
});

/// Translate known vocabulary words inside `text`
///
/// Text in the default language is returned untouched.
pub fn translate_text(language: Language, text: &str) -> Cow<'_, str> {
    if language.is_default() {
        return Cow::Borrowed(text);
    }

    VOCABULARY_PATTERN.replace_all(text, |caps: &Captures| {
        let word = caps[0].to_lowercase();
        translate(language, &word).to_string()
    })
}
