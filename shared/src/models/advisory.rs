//! Crop advisory models

use serde::{Deserialize, Serialize};

/// Three lines of advice for one crop, region and season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropAdvice {
    pub irrigation: String,
    pub pest_control: String,
    pub fertilizers: String,
}

/// Where a piece of advice came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSource {
    Generated,
    Fallback,
}

/// Crops offered on the advisory form
pub const CROPS: &[&str] = &["rice", "wheat", "cotton", "pulses", "vegetables", "fruits"];

/// Cropping seasons: monsoon, winter and summer
pub const SEASONS: &[&str] = &["kharif", "rabi", "zaid"];

/// Regions offered on the advisory form
pub const REGIONS: &[&str] = &[
    "andhra-pradesh",
    "assam",
    "bihar",
    "gujarat",
    "haryana",
    "karnataka",
    "kerala",
    "madhya-pradesh",
    "maharashtra",
    "odisha",
    "punjab",
    "rajasthan",
    "tamil-nadu",
    "telangana",
    "uttar-pradesh",
    "west-bengal",
];

/// A selectable option with its display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
}
