//! Mandi price listings
//!
//! Prices come from a fixed table of six states with two mandis each,
//! quoted in rupees per quintal.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{translate, Language, MarketPrice, PriceTrend, SelectOption};

/// States with price data, in display order
pub const MARKET_STATES: &[&str] = &[
    "andhra-pradesh",
    "maharashtra",
    "punjab",
    "uttar-pradesh",
    "karnataka",
    "gujarat",
];

const UNIT: &str = "quintal";

// (state, crop, mandi, current, previous)
const PRICE_TABLE: &[(&str, &str, &str, i64, i64)] = &[
    ("andhra-pradesh", "rice", "guntur-mandi", 2250, 2190),
    ("andhra-pradesh", "wheat", "vijayawada-mandi", 2100, 2150),
    ("maharashtra", "onion", "nashik-mandi", 1750, 1600),
    ("maharashtra", "cotton", "aurangabad-mandi", 6900, 6700),
    ("punjab", "wheat", "ludhiana-mandi", 2200, 2150),
    ("punjab", "rice", "amritsar-mandi", 2400, 2300),
    ("uttar-pradesh", "wheat", "lucknow-mandi", 2050, 2100),
    ("uttar-pradesh", "potato", "agra-mandi", 1400, 1450),
    ("karnataka", "tomato", "bangalore-mandi", 1950, 1800),
    ("karnataka", "onion", "hubli-mandi", 1680, 1730),
    ("gujarat", "cotton", "rajkot-mandi", 6850, 6600),
    ("gujarat", "tomato", "ahmedabad-mandi", 1780, 1850),
];

/// A price row with display names resolved for one language
#[derive(Debug, Clone, Serialize)]
pub struct MarketPriceView {
    #[serde(flatten)]
    pub price: MarketPrice,
    pub crop_name: String,
    pub mandi_name: String,
    pub unit_label: String,
    pub change: i64,
    pub percent_change: Option<Decimal>,
    pub trend: PriceTrend,
}

impl MarketPriceView {
    fn new(price: MarketPrice, language: Language) -> Self {
        Self {
            crop_name: translate(language, &price.crop).to_string(),
            mandi_name: translate(language, &price.mandi).to_string(),
            unit_label: translate(language, "perQuintal").to_string(),
            change: price.change(),
            percent_change: price.percent_change(),
            trend: price.trend(),
            price,
        }
    }
}

/// States offered on the market page, with localized names
pub fn states(language: Language) -> Vec<SelectOption> {
    MARKET_STATES
        .iter()
        .map(|id| SelectOption {
            id: id.to_string(),
            name: translate(language, id).to_string(),
        })
        .collect()
}

/// Prices quoted in a state, optionally for a single crop
///
/// An unknown state simply has no prices.
pub fn list_prices(state: &str, crop: Option<&str>, language: Language) -> Vec<MarketPriceView> {
    PRICE_TABLE
        .iter()
        .filter(|(s, c, ..)| *s == state && crop.map_or(true, |wanted| wanted == *c))
        .map(|&(state, crop, mandi, current, previous)| {
            let price = MarketPrice {
                state: state.to_string(),
                crop: crop.to_string(),
                mandi: mandi.to_string(),
                current,
                previous,
                unit: UNIT.to_string(),
            };
            MarketPriceView::new(price, language)
        })
        .collect()
}
