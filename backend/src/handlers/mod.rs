//! HTTP handlers
//!
//! The active language is passed with every request as a `lang` query
//! parameter or body field. Unknown or missing codes fall back to English.

pub mod advisory;
pub mod auth;
pub mod health;
pub mod localization;
pub mod market;
pub mod weather;

use serde::Deserialize;
use shared::Language;

pub use advisory::*;
pub use auth::*;
pub use health::*;
pub use localization::*;
pub use market::*;
pub use weather::*;

/// Query carrying only the active language
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn language(&self) -> Language {
        language_from(self.lang.as_deref())
    }
}

/// Resolve an optional language code, defaulting for unknown codes
pub fn language_from(code: Option<&str>) -> Language {
    code.and_then(Language::from_code).unwrap_or_default()
}
