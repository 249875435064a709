//! Shared types and models for the Mitra farming assistant
//!
//! This crate contains the localization resolver, canonical data models and
//! form validation shared between the backend, the browser (via WASM), and
//! other components of the system.

pub mod i18n;
pub mod models;
pub mod types;
pub mod validation;

pub use i18n::{translate, translate_text, LanguageSettings};
pub use models::*;
pub use types::*;
pub use validation::*;
